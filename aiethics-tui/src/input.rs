//! Keyboard and mouse dispatch: overlays first, then global keys.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{AppState, Overlay};
use crate::ui;

const WHEEL_ROWS: u16 = 3;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,

        // Panels
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_index(index);
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_panel();
            } else {
                app.next_panel();
            }
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_panel(),
        KeyCode::Right | KeyCode::Char('l') => app.next_panel(),

        // Scrolling
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page()),
        KeyCode::PageUp => app.scroll_up(app.page()),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),

        _ => {}
    }
}

/// Handle a mouse event. `area` is the full terminal area of the last frame.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.overlay != Overlay::None {
                app.overlay = Overlay::None;
                return;
            }
            let tabs = ui::layout(area).tabs;
            if let Some(id) = ui::tab_bar::tab_at(tabs, app.icons, mouse.column, mouse.row) {
                app.select_panel(id);
            }
        }
        MouseEventKind::ScrollDown if app.overlay == Overlay::None => {
            app.scroll_down(WHEEL_ROWS);
        }
        MouseEventKind::ScrollUp if app.overlay == Overlay::None => {
            app.scroll_up(WHEEL_ROWS);
        }
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-5", "Switch to panel by number"),
        ("Tab / l / →", "Next panel"),
        ("Shift+Tab / h / ←", "Previous panel"),
        ("Click", "Select a tab"),
        ("j / k / ↓ / ↑", "Scroll one line"),
        ("PgDn / Space, PgUp", "Scroll one page"),
        ("g / G", "Jump to top / bottom"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ]
}
