//! AI Ethics TUI - five-panel terminal viewer for the assignment.
//!
//! Panels:
//! 1. Overview - assignment structure, deliverables, tools
//! 2. Part 1: Theory - bias, transparency, GDPR, principles
//! 3. Part 2: Cases - hiring tool and facial recognition case studies
//! 4. Part 3: Audit - COMPAS fairness audit methodology
//! 5. Part 4: Reflection - ethical reflection on a personal project

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use aiethics_core::{ConfigError, IconStyle, ViewerConfig};
use aiethics_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(
    name = "aiethics-tui",
    about = "Tabbed terminal viewer for the AI ethics assignment"
)]
struct Args {
    /// Config file. Defaults to <config_dir>/aiethics/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use ASCII icons instead of Unicode symbols.
    #[arg(long, default_value_t = false)]
    ascii: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, config_error) = load_config(args.config.as_ref())?;
    if args.ascii {
        config.icons = IconStyle::Ascii;
    }
    let logging_enabled = logging::init(&config.log)?;
    info!(icons = ?config.icons, tick_ms = config.tick_rate_ms, "viewer starting");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut io::stderr());
        default_hook(info);
    }));

    let mut app = AppState::new(&config);
    if let (true, Some(path)) = (logging_enabled, &config.log.file) {
        app.set_status(format!("Logging to {}", path.display()));
    }
    if let Some(e) = config_error {
        warn!(error = %e, "falling back to default config");
        app.set_warning(format!("{e}; using defaults"));
    }

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            restore_terminal(&mut io::stdout());
            return Err(e);
        }
    };

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app, config.tick_rate());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(last_panel = %app.active_panel(), "viewer exiting");
    result
}

/// Enter the alternate screen with mouse capture. Raw mode is already on.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best-effort undo of terminal setup, for paths where a `?` would
/// otherwise leave the shell in raw mode.
fn restore_terminal(out: &mut impl io::Write) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Resolve and read the config file.
///
/// An explicit `--config` path must exist. A broken default config is not
/// fatal: defaults are used and the error is handed back for display.
fn load_config(explicit: Option<&PathBuf>) -> Result<(ViewerConfig, Option<ConfigError>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
        let config = ViewerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?;
        return Ok((config, None));
    }

    match ViewerConfig::default_path() {
        Some(path) => match ViewerConfig::load(&path) {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((ViewerConfig::default(), Some(e))),
        },
        None => Ok((ViewerConfig::default(), None)),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        // 1. Clamp scroll to the current viewport, then render
        ui::sync_viewport(app, area);
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, area),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_welcome = false\nicons = \"ascii\"\n").unwrap();

        let (config, error) = load_config(Some(&path)).unwrap();
        assert!(error.is_none());
        assert!(!config.show_welcome);
        assert_eq!(config.icons, IconStyle::Ascii);
    }

    #[test]
    fn broken_explicit_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"fast\"\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[?1049l"));
    }
}
