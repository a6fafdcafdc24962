//! Text renderings of content bodies: plain text and Markdown.
//!
//! Used by the CLI (`show`, `export`). The terminal viewer styles blocks
//! itself and does not go through here.

use std::fmt::{self, Write};

use crate::content::{content_for, Block, ContentBody};
use crate::icons::{IconRenderer, IconSize};
use crate::panel::registry;
use crate::{ASSIGNMENT_SUBTITLE, ASSIGNMENT_TITLE};

/// Output format for text renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
}

/// Render one panel body.
pub fn render_body(body: &ContentBody, format: Format, icons: &dyn IconRenderer) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_body(&mut out, body, format, icons, 1);
    out
}

/// Render every panel in registry order under the assignment title.
pub fn render_document(format: Format, icons: &dyn IconRenderer) -> String {
    let mut out = String::new();
    let _ = write_document(&mut out, format, icons);
    out
}

/// Stream the whole document into `out`.
pub fn write_document(
    out: &mut impl Write,
    format: Format,
    icons: &dyn IconRenderer,
) -> fmt::Result {
    heading(out, format, 1, ASSIGNMENT_TITLE)?;
    match format {
        Format::Text => writeln!(out, "{ASSIGNMENT_SUBTITLE}\n")?,
        Format::Markdown => writeln!(out, "_{ASSIGNMENT_SUBTITLE}_\n")?,
    }
    for panel in registry() {
        write_body(out, content_for(panel.id), format, icons, 2)?;
    }
    Ok(())
}

/// Stream one body into `out` with its title at heading `level`.
pub fn write_body(
    out: &mut impl Write,
    body: &ContentBody,
    format: Format,
    icons: &dyn IconRenderer,
    level: usize,
) -> fmt::Result {
    let md = format == Format::Markdown;
    heading(out, format, level, body.title)?;
    if let Some(lead) = body.lead {
        writeln!(out, "> {lead}\n")?;
    }

    for section in body.sections {
        heading(out, format, level + 1, section.heading)?;
        let mut prev: Option<&Block> = None;
        for block in section.blocks {
            if let Some(p) = prev {
                if !p.runs_into(block) {
                    if md && p.is_code() {
                        out.write_str("```\n")?;
                    }
                    out.write_char('\n')?;
                }
            }
            if md && block.is_code() && !prev.is_some_and(Block::is_code) {
                out.write_str("```\n")?;
            }
            write_block(out, block, format, icons, level + 2)?;
            prev = Some(block);
        }
        if md && prev.is_some_and(Block::is_code) {
            out.write_str("```\n")?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

fn heading(out: &mut impl Write, format: Format, level: usize, text: &str) -> fmt::Result {
    match format {
        Format::Markdown => writeln!(out, "{} {text}\n", "#".repeat(level)),
        Format::Text => {
            let underline = match level {
                1 => '=',
                2 => '-',
                _ => '~',
            };
            let width = text.chars().count();
            writeln!(out, "{text}\n{}\n", underline.to_string().repeat(width))
        }
    }
}

fn write_block(
    out: &mut impl Write,
    block: &Block,
    format: Format,
    icons: &dyn IconRenderer,
    sub_level: usize,
) -> fmt::Result {
    let md = format == Format::Markdown;
    match *block {
        Block::Paragraph(text) => writeln!(out, "{text}"),
        Block::Subheading { text, .. } if md => writeln!(out, "{} {text}", "#".repeat(sub_level)),
        Block::Subheading { text, .. } => writeln!(out, "» {text}"),
        Block::Term(text) if md => writeln!(out, "**{text}**"),
        Block::Term(text) => writeln!(out, "{text}"),
        Block::Labeled { label, text } if md => writeln!(out, "**{label}:** {text}"),
        Block::Labeled { label, text } => writeln!(out, "{label}:\n  {text}"),
        Block::Bullet(text) if md => writeln!(out, "- {text}"),
        Block::Bullet(text) => writeln!(out, "  - {text}"),
        Block::LabeledBullet { label, text } if md => writeln!(out, "- **{label}:** {text}"),
        Block::LabeledBullet { label, text } => writeln!(out, "  - {label}: {text}"),
        Block::IconBullet { icon, text } => {
            let glyph = icons.glyph(icon, IconSize::Small);
            if md {
                writeln!(out, "- {glyph} {text}")
            } else {
                writeln!(out, "  {glyph} {text}")
            }
        }
        Block::Note(text) if md => writeln!(out, "*{text}*"),
        Block::Note(text) => writeln!(out, "> {text}"),
        Block::Code(text) if md => writeln!(out, "{text}"),
        Block::Code(text) => writeln!(out, "    {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{AsciiIcons, UnicodeIcons};
    use crate::panel::PanelId;

    #[test]
    fn text_includes_every_heading() {
        for id in PanelId::ALL {
            let body = content_for(id);
            let text = render_body(body, Format::Text, &UnicodeIcons);
            assert!(text.starts_with(body.title));
            for h in body.headings() {
                assert!(text.contains(h), "{id}: missing heading {h:?}");
            }
        }
    }

    #[test]
    fn markdown_headings_and_labels() {
        let md = render_body(content_for(PanelId::Part1), Format::Markdown, &UnicodeIcons);
        assert!(md.starts_with("# Part 1: Theoretical Understanding\n"));
        assert!(md.contains("## Q1: Algorithmic Bias\n"));
        assert!(md.contains("**Definition:** Algorithmic bias"));
        assert!(md.contains("- **Trust:** Users need"));
        assert!(md.contains("### Transparency\n"));
    }

    #[test]
    fn markdown_fences_code_lines_once() {
        let md = render_body(content_for(PanelId::Part3), Format::Markdown, &UnicodeIcons);
        assert_eq!(md.matches("```").count(), 2);
        assert!(md.contains(
            "```\n# Download the Python code from the artifact\n# Or copy the code provided separately\n```\n"
        ));
    }

    #[test]
    fn icon_bullets_use_renderer() {
        let text = render_body(content_for(PanelId::Overview), Format::Text, &AsciiIcons);
        assert!(text.contains("  # PDF with written answers"));
        assert!(text.contains("  > Jupyter Notebook"));
    }

    #[test]
    fn list_items_are_contiguous() {
        let text = render_body(content_for(PanelId::Overview), Format::Text, &AsciiIcons);
        assert!(text.contains("  - AI Fairness 360 (IBM)\n  - COMPAS Recidivism Dataset\n"));
    }

    #[test]
    fn lead_is_quoted() {
        let md = render_body(content_for(PanelId::Part4), Format::Markdown, &UnicodeIcons);
        assert!(md.contains("> Reflect on a personal project"));
    }

    #[test]
    fn document_contains_all_panels_in_order() {
        let doc = render_document(Format::Markdown, &UnicodeIcons);
        assert!(doc.starts_with("# AI Ethics Assignment\n"));
        let positions: Vec<usize> = registry()
            .iter()
            .map(|p| {
                let title = content_for(p.id).title;
                doc.find(&format!("## {title}\n")).expect("panel title present")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Sink that fails after a fixed number of bytes.
    struct Limited(usize);

    impl Write for Limited {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if s.len() > self.0 {
                return Err(fmt::Error);
            }
            self.0 -= s.len();
            Ok(())
        }
    }

    #[test]
    fn writer_errors_propagate() {
        let mut sink = Limited(64);
        assert!(write_document(&mut sink, Format::Text, &AsciiIcons).is_err());

        let mut roomy = Limited(usize::MAX);
        assert!(write_document(&mut roomy, Format::Markdown, &AsciiIcons).is_ok());
    }

    #[test]
    fn streamed_body_matches_rendered() {
        let body = content_for(PanelId::Part2);
        let mut out = String::new();
        write_body(&mut out, body, Format::Markdown, &UnicodeIcons, 1).unwrap();
        assert_eq!(out, render_body(body, Format::Markdown, &UnicodeIcons));
    }
}
