//! Application state: single-owner, main-thread only.
//!
//! The active panel lives in the `ViewSelector`; everything else here is view
//! state that only matters while the terminal is open.

use aiethics_core::{ContentBody, IconStyle, PanelId, ViewSelector, ViewerConfig};
use tracing::warn;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub selector: ViewSelector,
    pub running: bool,

    // Content viewport
    pub scroll: u16,
    pub max_scroll: u16,
    pub viewport_height: u16,

    // Cross-cutting
    pub overlay: Overlay,
    pub icons: IconStyle,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            selector: ViewSelector::new(),
            running: true,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
            overlay: if config.show_welcome {
                Overlay::Welcome
            } else {
                Overlay::None
            },
            icons: config.icons,
            status_message: None,
        }
    }

    pub fn active_panel(&self) -> PanelId {
        self.selector.active()
    }

    pub fn active_content(&self) -> &'static ContentBody {
        self.selector.active_content()
    }

    /// Switch panels. Scroll resets only when the panel actually changes.
    pub fn select_panel(&mut self, id: PanelId) {
        if self.selector.select(id) {
            self.scroll = 0;
        }
    }

    /// Switch by 0-based tab position (number keys).
    pub fn select_index(&mut self, index: usize) {
        match self.selector.select_index(index) {
            Ok(true) => self.scroll = 0,
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "tab selection rejected");
                self.set_warning(e.to_string());
            }
        }
    }

    pub fn next_panel(&mut self) {
        if self.selector.next() {
            self.scroll = 0;
        }
    }

    pub fn prev_panel(&mut self) {
        if self.selector.previous() {
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    /// One page: the visible content height, minus one line of overlap.
    pub fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }

    /// Record the current viewport size and clamp scroll into range.
    pub fn set_viewport(&mut self, height: u16, max_scroll: u16) {
        self.viewport_height = height;
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
