//! AI Ethics CLI: print assignment panels without the terminal viewer.
//!
//! Commands:
//! - `list` - registered panels in tab order
//! - `show` - one panel's content as text, Markdown, or JSON
//! - `export` - the whole assignment as one document

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use aiethics_core::{
    registry, render_body, render_document, resolve_panel_content, Format, IconSize, IconStyle,
    PanelId, ViewSelector,
};

#[derive(Parser)]
#[command(
    name = "aiethics",
    about = "AI Ethics Assignment CLI: list, show, and export panels"
)]
struct Cli {
    /// Use ASCII icons instead of Unicode symbols.
    #[arg(long, global = true, default_value_t = false)]
    ascii: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered panels in tab order.
    List {
        /// Print the registry as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one panel's content.
    Show {
        /// Panel id: overview, part1, part2, part3, part4.
        panel: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,

        /// Fail on an unknown panel id instead of showing the overview.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Write every panel as a single document.
    Export {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,

        /// Destination file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShowFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Text,
    Markdown,
}

impl From<ExportFormat> for Format {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Text => Format::Text,
            ExportFormat::Markdown => Format::Markdown,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let icons = if cli.ascii {
        IconStyle::Ascii
    } else {
        IconStyle::Unicode
    };

    match cli.command {
        Commands::List { json } => {
            print!("{}", list_output(json, icons)?);
            Ok(())
        }
        Commands::Show {
            panel,
            format,
            strict,
        } => {
            print!("{}", show_output(&panel, format, strict, icons)?);
            Ok(())
        }
        Commands::Export { format, output } => run_export(format, output.as_deref(), icons),
    }
}

/// Stderr logging, `RUST_LOG` or `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn list_output(json: bool, icons: IconStyle) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(registry())?;
        out.push('\n');
        return Ok(out);
    }

    let renderer = icons.renderer();
    let mut out = String::new();
    for panel in registry() {
        out.push_str(&format!(
            "{}  {:<9} {} {}\n",
            panel.id.index() + 1,
            panel.id.as_str(),
            renderer.glyph(panel.icon, IconSize::Regular),
            panel.display_name
        ));
    }
    Ok(out)
}

/// Render the requested panel.
///
/// The request goes through a fresh `ViewSelector`, exactly as a tab click
/// would. A rejected id leaves the selector on the overview, which is what
/// gets shown unless `strict` turns the rejection into an error.
fn show_output(panel: &str, format: ShowFormat, strict: bool, icons: IconStyle) -> Result<String> {
    let mut selector = ViewSelector::new();
    let body = match selector.select_panel(panel) {
        Ok(_) => selector.active_content(),
        Err(e) if strict => return Err(e).context("--strict rejects unknown panels"),
        Err(_) => {
            info!(requested = panel, "showing default panel");
            resolve_panel_content(panel)
        }
    };
    debug!(panel = %body.panel, ?format, "rendering panel");

    match format {
        ShowFormat::Json => {
            let mut out = serde_json::to_string_pretty(&serde_json::json!({
                "panel": body.panel.panel(),
                "content": body,
            }))?;
            out.push('\n');
            Ok(out)
        }
        ShowFormat::Text => Ok(render_body(body, Format::Text, icons.renderer())),
        ShowFormat::Markdown => Ok(render_body(body, Format::Markdown, icons.renderer())),
    }
}

fn run_export(format: ExportFormat, output: Option<&Path>, icons: IconStyle) -> Result<()> {
    let doc = render_document(format.into(), icons.renderer());

    match output {
        Some(path) => {
            std::fs::write(path, &doc)
                .with_context(|| format!("writing export to {}", path.display()))?;
            info!(path = %path.display(), panels = PanelId::ALL.len(), "export written");
            println!(
                "Exported {} panels to {}",
                PanelId::ALL.len(),
                path.display()
            );
        }
        None => print!("{doc}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiethics_core::{content_for, SelectionError};

    #[test]
    fn parses_show_with_defaults() {
        let cli = Cli::try_parse_from(["aiethics", "show", "part3"]).unwrap();
        match cli.command {
            Commands::Show {
                panel,
                format,
                strict,
            } => {
                assert_eq!(panel, "part3");
                assert_eq!(format, ShowFormat::Text);
                assert!(!strict);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn ascii_flag_is_global() {
        let cli = Cli::try_parse_from(["aiethics", "list", "--ascii"]).unwrap();
        assert!(cli.ascii);
    }

    #[test]
    fn export_rejects_json() {
        assert!(Cli::try_parse_from(["aiethics", "export", "--format", "json"]).is_err());
    }

    #[test]
    fn list_is_in_tab_order() {
        let out = list_output(false, IconStyle::Ascii).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1  overview  [=] Overview");
        assert!(lines[3].starts_with("4  part3"));
    }

    #[test]
    fn list_json_has_every_panel() {
        let out = list_output(true, IconStyle::Unicode).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let ids: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["overview", "part1", "part2", "part3", "part4"]);
        assert_eq!(value[2]["icon"], "file_text");
    }

    #[test]
    fn show_known_panel() {
        let out = show_output("part3", ShowFormat::Markdown, true, IconStyle::Ascii).unwrap();
        assert!(out.starts_with("# Part 3: Practical Audit"));
        assert!(out.contains("COMPAS Fairness Audit"));
    }

    #[test]
    fn show_unknown_panel_falls_back() {
        let out = show_output("nonexistent", ShowFormat::Text, false, IconStyle::Ascii).unwrap();
        assert!(out.contains("Assignment Structure"));
    }

    #[test]
    fn strict_show_rejects_unknown_panel() {
        let err = show_output("nonexistent", ShowFormat::Text, true, IconStyle::Ascii).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectionError>(),
            Some(&SelectionError::UnknownPanel("nonexistent".into()))
        );
    }

    #[test]
    fn show_json_carries_panel_and_content() {
        let out = show_output("part4", ShowFormat::Json, false, IconStyle::Ascii).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["panel"]["display_name"], "Part 4: Reflection");
        assert_eq!(value["content"]["title"], "Part 4: Ethical Reflection");
        assert!(value["content"]["sections"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignment.md");
        run_export(ExportFormat::Markdown, Some(&path), IconStyle::Ascii).unwrap();

        let doc = std::fs::read_to_string(&path).unwrap();
        assert!(doc.starts_with("# AI Ethics Assignment"));
        for id in PanelId::ALL {
            assert!(doc.contains(content_for(id).title), "{id} missing from export");
        }
    }

    #[test]
    fn export_to_missing_directory_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        let err = run_export(ExportFormat::Text, Some(&path), IconStyle::Ascii).unwrap_err();
        assert!(err.to_string().contains("writing export to"));
    }
}
