//! Active panel body: styled, wrapped, scrollable.
//!
//! Lines are wrapped here rather than by `Paragraph`, so the row count used
//! to clamp scrolling is exactly what gets drawn.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use aiethics_core::{Block as ContentBlock, ContentBody, IconSize, IconStyle, Tone};

use crate::app::AppState;
use crate::theme;

const BULLET: &str = "  • ";

fn frame_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(title)
        .title_style(theme::accent_bold())
}

/// Area left for text once the border is drawn.
pub fn inner(area: Rect) -> Rect {
    frame_block(String::new()).inner(area)
}

/// Styled lines for a body, wrapped to `width` cells.
pub fn layout_lines(body: &ContentBody, icons: IconStyle, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut out = Vec::new();
    for (line, hang) in unwrapped(body, icons) {
        wrap(line, hang, width, &mut out);
    }
    out
}

/// Rows the body occupies at `width`.
pub fn content_rows(body: &ContentBody, icons: IconStyle, width: u16) -> usize {
    layout_lines(body, icons, width).len()
}

/// Each logical line with the indent its continuation rows hang at.
fn unwrapped(body: &ContentBody, icons: IconStyle) -> Vec<(Line<'static>, usize)> {
    let mut lines = Vec::new();
    let blank = || (Line::from(""), 0);

    lines.push((
        Line::from(Span::styled(body.title, theme::heading(Tone::Accent))),
        0,
    ));
    lines.push(blank());

    if let Some(lead) = body.lead {
        lines.push((
            Line::from(Span::styled(lead, theme::muted().add_modifier(Modifier::ITALIC))),
            0,
        ));
        lines.push(blank());
    }

    for section in body.sections {
        lines.push((
            Line::from(Span::styled(
                section.heading,
                theme::heading(section.tone).add_modifier(Modifier::UNDERLINED),
            )),
            0,
        ));
        let mut prev: Option<&ContentBlock> = None;
        for block in section.blocks {
            if prev.is_some_and(|p| !p.runs_into(block)) {
                lines.push(blank());
            }
            block_lines(&mut lines, block, icons);
            prev = Some(block);
        }
        lines.push(blank());
    }

    lines
}

fn block_lines(lines: &mut Vec<(Line<'static>, usize)>, block: &ContentBlock, icons: IconStyle) {
    let bold = theme::text().add_modifier(Modifier::BOLD);
    match *block {
        ContentBlock::Paragraph(text) => {
            lines.push((Line::from(Span::styled(text, theme::text())), 0));
        }
        ContentBlock::Subheading { text, tone } => lines.push((
            Line::from(vec![
                Span::styled("▌ ", theme::heading(tone)),
                Span::styled(text, theme::heading(tone)),
            ]),
            2,
        )),
        ContentBlock::Term(text) => lines.push((Line::from(Span::styled(text, bold)), 0)),
        ContentBlock::Labeled { label, text } => {
            lines.push((Line::from(Span::styled(format!("{label}:"), bold)), 0));
            lines.push((Line::from(Span::styled(text, theme::text())), 0));
        }
        ContentBlock::Bullet(text) => lines.push((
            Line::from(vec![
                Span::styled(BULLET, theme::accent()),
                Span::styled(text, theme::text()),
            ]),
            BULLET.width(),
        )),
        ContentBlock::LabeledBullet { label, text } => lines.push((
            Line::from(vec![
                Span::styled(BULLET, theme::accent()),
                Span::styled(format!("{label}: "), bold),
                Span::styled(text, theme::text()),
            ]),
            BULLET.width(),
        )),
        ContentBlock::IconBullet { icon, text } => {
            let marker = format!("  {} ", icons.renderer().glyph(icon, IconSize::Small));
            let hang = marker.width();
            lines.push((
                Line::from(vec![
                    Span::styled(marker, theme::accent()),
                    Span::styled(text, theme::text()),
                ]),
                hang,
            ));
        }
        ContentBlock::Note(text) => lines.push((
            Line::from(Span::styled(text, theme::muted().add_modifier(Modifier::ITALIC))),
            0,
        )),
        ContentBlock::Code(text) => lines.push((
            Line::from(Span::styled(format!("    {text}"), theme::muted())),
            4,
        )),
    }
}

/// A row being filled by `wrap`.
struct Row {
    spans: Vec<Span<'static>>,
    used: usize,
    filled: bool,
}

impl Row {
    fn push(&mut self, text: String, style: Style, width: usize) {
        self.spans.push(Span::styled(text, style));
        self.used += width;
        self.filled = true;
    }

    /// Finish this row and start a continuation row indented by `hang`.
    fn take(&mut self, hang: usize) -> Line<'static> {
        let line = Line::from(std::mem::take(&mut self.spans));
        self.used = hang;
        self.filled = false;
        if hang > 0 {
            self.spans.push(Span::raw(" ".repeat(hang)));
        }
        line
    }
}

/// Greedy word wrap of one styled line. Words longer than a row are broken
/// between characters. Trailing spaces may overhang the right edge.
fn wrap(line: Line<'static>, hang: usize, width: usize, out: &mut Vec<Line<'static>>) {
    if line.width() <= width {
        out.push(line);
        return;
    }
    let hang = if hang * 2 >= width { 0 } else { hang };
    let mut row = Row {
        spans: Vec::new(),
        used: 0,
        filled: false,
    };

    for span in line.spans {
        let style = span.style;
        for word in span.content.split_inclusive(' ') {
            let visible = word.trim_end().width();
            if row.filled && row.used + visible > width {
                out.push(row.take(hang));
            }
            if row.used + visible <= width {
                row.push(word.to_string(), style, word.width());
                continue;
            }
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if row.filled && row.used + cw > width {
                    out.push(row.take(hang));
                }
                row.push(ch.to_string(), style, cw);
            }
        }
    }

    if row.filled {
        out.push(Line::from(row.spans));
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.selector.active_panel();
    let block = frame_block(format!(
        " {} [{}] ",
        panel.display_name,
        panel.id.index() + 1
    ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = layout_lines(app.active_content(), app.icons, inner.width);
    let para = Paragraph::new(lines).scroll((app.scroll, 0));
    f.render_widget(para, inner);
}
