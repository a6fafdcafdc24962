//! Bottom status bar: panel hints, last status message, position.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aiethics_core::registry;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);

    let mut spans: Vec<Span> = Vec::new();

    // Panel hints
    spans.push(Span::styled(
        format!(" 1-{}:panel Tab:next j/k:scroll ?:help q:quit", registry().len()),
        theme::muted(),
    ));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let position = format!(
        "{}/{} {:>3}% ",
        app.active_panel().index() + 1,
        registry().len(),
        scroll_percent(app.scroll, app.max_scroll)
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(position, theme::accent())))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// How far down the content the viewport is. Unscrollable content is 100%.
fn scroll_percent(scroll: u16, max_scroll: u16) -> u16 {
    if max_scroll == 0 {
        100
    } else {
        ((scroll as u32 * 100) / max_scroll as u32) as u16
    }
}
