//! AI Ethics TUI - tabbed terminal viewer for the assignment content.
//!
//! Layout:
//! - Header with the assignment title
//! - Tab bar, one tab per registered panel
//! - Active panel body (scrollable)
//! - Status bar

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};
