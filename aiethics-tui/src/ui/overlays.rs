//! Overlay widgets: welcome and key-binding help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use aiethics_core::{registry, IconSize, IconStyle};

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, icons: IconStyle) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome ")
        .title_style(theme::accent_bold());

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This viewer walks through the assignment in five panels:",
            theme::accent_bold(),
        )),
        Line::from(""),
    ];
    for (i, panel) in registry().iter().enumerate() {
        let glyph = icons.renderer().glyph(panel.icon, IconSize::Small);
        text.push(Line::from(vec![
            Span::styled(format!("  {}  ", i + 1), theme::accent()),
            Span::styled(format!("{glyph} {}", panel.display_name), theme::muted()),
        ]));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Number keys or Tab switch panels, j/k scroll, ? shows all keys.",
        theme::muted(),
    )));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::accent(),
    )));

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Key-binding help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>20}  ", keys), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}
