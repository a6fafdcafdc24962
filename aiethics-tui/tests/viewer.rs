//! End-to-end rendering: drive the app with key and mouse events and read
//! the frame back from a `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use aiethics_core::{IconStyle, PanelId, ViewerConfig};
use aiethics_tui::{handle_key, handle_mouse, ui, AppState};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn config() -> ViewerConfig {
    ViewerConfig {
        show_welcome: false,
        icons: IconStyle::Ascii,
        ..ViewerConfig::default()
    }
}

/// Render one frame and return it as newline-separated rows.
fn frame(app: &mut AppState) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    ui::sync_viewport(app, Rect::new(0, 0, WIDTH, HEIGHT));
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn initial_frame_shows_overview() {
    let mut app = AppState::new(&config());
    let screen = frame(&mut app);

    assert!(screen.contains("AI Ethics Assignment"));
    assert!(screen.contains("Designing Responsible and Fair AI Systems"));
    assert!(screen.contains("[=] Overview"));
    assert!(screen.contains("Assignment Structure"));
    assert!(screen.contains("AI Fairness 360 (IBM)"));
    assert!(!screen.contains("COMPAS Fairness Audit"));
}

#[test]
fn every_tab_label_is_visible() {
    let mut app = AppState::new(&config());
    let screen = frame(&mut app);
    for panel in aiethics_core::registry() {
        assert!(screen.contains(panel.display_name), "{} missing", panel.display_name);
    }
}

#[test]
fn number_key_switches_to_audit() {
    let mut app = AppState::new(&config());
    press(&mut app, KeyCode::Char('4'));
    let screen = frame(&mut app);

    assert_eq!(app.active_panel(), PanelId::Part3);
    assert!(screen.contains("COMPAS Fairness Audit"));
    assert!(screen.contains("Expected Findings"));
    assert!(!screen.contains("Assignment Structure"));
}

#[test]
fn clicking_a_tab_switches_panel() {
    let mut app = AppState::new(&config());
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let tabs = ui::layout(area).tabs;
    let (id, rect) = ui::tab_bar::tab_regions(tabs, app.icons)
        .into_iter()
        .find(|(id, _)| *id == PanelId::Part4)
        .unwrap();

    handle_mouse(
        &mut app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        },
        area,
    );

    assert_eq!(app.active_panel(), id);
    let screen = frame(&mut app);
    assert!(screen.contains("Ethical Principles Implementation"));
}

#[test]
fn scrolling_reveals_later_content() {
    let mut app = AppState::new(&config());
    press(&mut app, KeyCode::Char('3'));
    let top = frame(&mut app);
    assert!(top.contains("Case 1: Amazon Biased Hiring Tool"));
    assert!(app.max_scroll > 0);

    press(&mut app, KeyCode::Char('G'));
    let bottom = frame(&mut app);
    assert!(bottom.contains("Accountability Mechanisms"));
    assert!(!bottom.contains("Case 1: Amazon Biased Hiring Tool"));

    // Idempotent reselect keeps the position.
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.scroll, app.max_scroll);

    // Switching panels starts at the top.
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.scroll, 0);
}

#[test]
fn welcome_then_help_overlay() {
    let mut app = AppState::new(&ViewerConfig {
        icons: IconStyle::Ascii,
        ..ViewerConfig::default()
    });
    assert!(frame(&mut app).contains("Press any key to dismiss"));

    press(&mut app, KeyCode::Enter);
    assert!(!frame(&mut app).contains("Press any key to dismiss"));

    press(&mut app, KeyCode::Char('?'));
    let screen = frame(&mut app);
    assert!(screen.contains("Keys [Esc]close"));
    assert!(screen.contains("Switch to panel by number"));
}

#[test]
fn out_of_range_number_shows_warning() {
    let mut app = AppState::new(&config());
    press(&mut app, KeyCode::Char('7'));
    let screen = frame(&mut app);
    assert_eq!(app.active_panel(), PanelId::Overview);
    assert!(screen.contains("out of range"));
}
