//! Top-level UI layout: header, tab bar, active panel, status bar.

pub mod content_panel;
pub mod overlays;
pub mod status_bar;
pub mod tab_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aiethics_core::{ASSIGNMENT_SUBTITLE, ASSIGNMENT_TITLE};

use crate::app::{AppState, Overlay};
use crate::theme;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the terminal area. Pure, so mouse hit-testing can reuse it.
pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let regions = layout(f.area());

    draw_header(f, regions.header);
    tab_bar::render(f, regions.tabs, app);
    content_panel::render(f, regions.content, app);
    status_bar::render(f, regions.status, app);

    // Overlays on top of the content area.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, regions.content, app.icons),
        Overlay::Help => overlays::render_help(f, regions.content),
        Overlay::None => {}
    }
}

/// Recompute the content viewport for `area` and store it on the app, so
/// scrolling is clamped against what will actually be drawn.
pub fn sync_viewport(app: &mut AppState, area: Rect) {
    let inner = content_panel::inner(layout(area).content);
    let rows = content_panel::content_rows(app.active_content(), app.icons, inner.width);
    let max_scroll = rows.saturating_sub(inner.height as usize);
    app.set_viewport(inner.height, max_scroll.min(u16::MAX as usize) as u16);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(format!(" {ASSIGNMENT_TITLE}"), theme::accent_bold())),
        Line::from(Span::styled(format!(" {ASSIGNMENT_SUBTITLE}"), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiethics_core::ViewerConfig;

    #[test]
    fn layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let l = layout(area);
        assert_eq!(l.header.height, 2);
        assert_eq!(l.tabs, Rect::new(0, 2, 80, 1));
        assert_eq!(l.status, Rect::new(0, 23, 80, 1));
        assert_eq!(l.content.height, 24 - 4);
    }

    #[test]
    fn viewport_tracks_terminal_size() {
        let mut app = AppState::new(&ViewerConfig::default());
        sync_viewport(&mut app, Rect::new(0, 0, 80, 24));
        // content area minus borders
        assert_eq!(app.viewport_height, 24 - 4 - 2);

        // A huge terminal shows everything; nothing to scroll.
        sync_viewport(&mut app, Rect::new(0, 0, 200, 500));
        assert_eq!(app.max_scroll, 0);
    }

    #[test]
    fn long_panels_scroll_on_small_terminals() {
        let mut app = AppState::new(&ViewerConfig::default());
        app.select_panel(aiethics_core::PanelId::Part2);
        sync_viewport(&mut app, Rect::new(0, 0, 80, 24));
        assert!(app.max_scroll > 0);
    }
}
