//! Static content bodies and the panel id → body dispatch.
//!
//! Each panel's body lives in its own module as `'static` data. `content_for`
//! is an exhaustive match over `PanelId`, so adding a panel without a body is
//! a compile error.

mod audit;
mod cases;
mod overview;
mod reflection;
mod theory;

use serde::Serialize;

use crate::panel::{Icon, PanelId};

/// Presentation tone for a heading. Hosts map tones to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Plain,
    Accent,
    Info,
    Positive,
    Caution,
    Critical,
}

/// One unit of content inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Paragraph(&'static str),
    /// Sub-heading inside a section, with its own tone.
    Subheading { text: &'static str, tone: Tone },
    /// A bold standalone line, usually introducing bullets.
    Term(&'static str),
    /// "Label: text" paragraph.
    Labeled { label: &'static str, text: &'static str },
    Bullet(&'static str),
    /// "**Label:** text" bullet.
    LabeledBullet { label: &'static str, text: &'static str },
    /// Bullet whose marker is an icon glyph.
    IconBullet { icon: Icon, text: &'static str },
    /// Italic aside or prompt.
    Note(&'static str),
    /// Monospace line.
    Code(&'static str),
}

impl Block {
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::Bullet(_) | Block::LabeledBullet { .. } | Block::IconBullet { .. }
        )
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code(_))
    }

    /// Whether `next` follows this block without a blank line in between:
    /// consecutive list items, consecutive code lines, and a term followed by
    /// the list it introduces.
    pub fn runs_into(&self, next: &Block) -> bool {
        (self.is_list_item() && next.is_list_item())
            || (self.is_code() && next.is_code())
            || (matches!(self, Block::Term(_)) && next.is_list_item())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub tone: Tone,
    pub blocks: &'static [Block],
}

/// Pre-authored content of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBody {
    pub panel: PanelId,
    pub title: &'static str,
    pub lead: Option<&'static str>,
    pub sections: &'static [Section],
}

impl ContentBody {
    /// Section headings in order.
    pub fn headings(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|s| s.heading)
    }
}

/// Body registered for `id`.
pub fn content_for(id: PanelId) -> &'static ContentBody {
    match id {
        PanelId::Overview => &overview::BODY,
        PanelId::Part1 => &theory::BODY,
        PanelId::Part2 => &cases::BODY,
        PanelId::Part3 => &audit::BODY,
        PanelId::Part4 => &reflection::BODY,
    }
}

/// Resolve a panel token to its body.
///
/// Unregistered tokens fall back to the default panel's body. The id set is
/// closed, so the fallback is only reachable from untyped input (CLI args).
pub fn resolve_panel_content(id: &str) -> &'static ContentBody {
    let id = id.parse::<PanelId>().unwrap_or_else(|_| PanelId::default_panel());
    content_for(id)
}
