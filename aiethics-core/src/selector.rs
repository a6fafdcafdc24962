//! Selection state: which panel is active.
//!
//! `ViewSelector` is owned by the host (the terminal app or a test) and is the
//! only place the active panel changes. Every transition goes through
//! [`ViewSelector::select`]; the string and index entry points validate first
//! and leave the state untouched on failure.

use tracing::{debug, warn};

use crate::content::{content_for, ContentBody};
use crate::panel::{Panel, PanelId};

/// Rejected selection requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown panel id: {0:?}")]
    UnknownPanel(String),
    #[error("panel index {index} out of range (registry has {len} panels)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Holds the active panel id. Always a registered id; never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelector {
    active: PanelId,
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSelector {
    /// Start on the first registered panel.
    pub fn new() -> Self {
        Self {
            active: PanelId::default_panel(),
        }
    }

    pub fn active(&self) -> PanelId {
        self.active
    }

    pub fn active_panel(&self) -> &'static Panel {
        self.active.panel()
    }

    /// Content body of the active panel.
    pub fn active_content(&self) -> &'static ContentBody {
        content_for(self.active)
    }

    /// Make `id` the active panel.
    ///
    /// Returns `true` when the active panel changed, `false` when `id` was
    /// already active. Hosts redraw (and reset scroll) only on `true`.
    pub fn select(&mut self, id: PanelId) -> bool {
        if self.active == id {
            return false;
        }
        debug!(from = %self.active, to = %id, "panel transition");
        self.active = id;
        true
    }

    /// Select by token (`"overview"`, `"part1"`, ...).
    ///
    /// An unregistered token is rejected and the active panel is unchanged.
    pub fn select_panel(&mut self, id: &str) -> Result<bool, SelectionError> {
        match id.parse::<PanelId>() {
            Ok(id) => Ok(self.select(id)),
            Err(e) => {
                warn!(requested = id, active = %self.active, "rejected panel selection");
                Err(e)
            }
        }
    }

    /// Select by 0-based registry position.
    pub fn select_index(&mut self, index: usize) -> Result<bool, SelectionError> {
        let id = PanelId::from_index(index).ok_or(SelectionError::IndexOutOfRange {
            index,
            len: PanelId::ALL.len(),
        })?;
        Ok(self.select(id))
    }

    /// Advance to the next panel, wrapping. Returns whether the panel changed.
    pub fn next(&mut self) -> bool {
        self.select(self.active.next())
    }

    /// Step back to the previous panel, wrapping.
    pub fn previous(&mut self) -> bool {
        self.select(self.active.prev())
    }
}
