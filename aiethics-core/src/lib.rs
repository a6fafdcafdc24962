//! AI Ethics Core: the panel registry, the selection state machine, and the
//! static assignment content each panel displays.
//!
//! This crate contains everything that does not depend on a display surface:
//! - Fixed, ordered panel registry (id, display name, icon reference)
//! - `ViewSelector`, the single piece of mutable view state
//! - Static content bodies and the id → body dispatch
//! - Plain-text and Markdown rendering of content bodies
//! - Icon rendering capability (`IconRenderer`)
//! - Read-only viewer configuration loaded from TOML

pub mod config;
pub mod content;
pub mod icons;
pub mod panel;
pub mod render;
pub mod selector;

pub use config::{ConfigError, LogConfig, ViewerConfig};
pub use content::{content_for, resolve_panel_content, Block, ContentBody, Section, Tone};
pub use icons::{AsciiIcons, IconRenderer, IconSize, IconStyle, UnicodeIcons};
pub use panel::{registry, Icon, Panel, PanelId};
pub use render::{render_body, render_document, write_body, write_document, Format};
pub use selector::{SelectionError, ViewSelector};

/// Assignment title shown above the tab bar and at the top of exports.
pub const ASSIGNMENT_TITLE: &str = "AI Ethics Assignment";

/// Subtitle shown under the assignment title.
pub const ASSIGNMENT_SUBTITLE: &str = "Designing Responsible and Fair AI Systems";
