//! Icon rendering capability.
//!
//! Panels and some content blocks carry a symbolic [`Icon`]. Hosts turn it
//! into a glyph through an `IconRenderer`; which renderer is used is a
//! configuration choice (`icons = "unicode" | "ascii"`).

use serde::{Deserialize, Serialize};

use crate::panel::Icon;

/// Glyph size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Inline marker (list bullets).
    Small,
    /// Tab bar.
    Regular,
}

/// Given an icon reference and a size, produce a visual glyph.
pub trait IconRenderer: Send + Sync {
    fn glyph(&self, icon: Icon, size: IconSize) -> &'static str;
}

/// Unicode symbols. Regular glyphs are emoji and occupy two terminal cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeIcons;

impl IconRenderer for UnicodeIcons {
    fn glyph(&self, icon: Icon, size: IconSize) -> &'static str {
        match (size, icon) {
            (IconSize::Regular, Icon::BookOpen) => "📖",
            (IconSize::Regular, Icon::Brain) => "🧠",
            (IconSize::Regular, Icon::FileText) => "📄",
            (IconSize::Regular, Icon::Code) => "💻",
            (IconSize::Regular, Icon::Shield) => "🔰",
            (IconSize::Small, Icon::BookOpen) => "§",
            (IconSize::Small, Icon::Brain) => "∴",
            (IconSize::Small, Icon::FileText) => "¶",
            (IconSize::Small, Icon::Code) => "λ",
            (IconSize::Small, Icon::Shield) => "◆",
        }
    }
}

/// Plain ASCII for terminals without emoji fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconRenderer for AsciiIcons {
    fn glyph(&self, icon: Icon, size: IconSize) -> &'static str {
        match (size, icon) {
            (IconSize::Regular, Icon::BookOpen) => "[=]",
            (IconSize::Regular, Icon::Brain) => "[*]",
            (IconSize::Regular, Icon::FileText) => "[#]",
            (IconSize::Regular, Icon::Code) => "[<>]",
            (IconSize::Regular, Icon::Shield) => "[+]",
            (IconSize::Small, Icon::BookOpen) => "=",
            (IconSize::Small, Icon::Brain) => "*",
            (IconSize::Small, Icon::FileText) => "#",
            (IconSize::Small, Icon::Code) => ">",
            (IconSize::Small, Icon::Shield) => "+",
        }
    }
}

static UNICODE: UnicodeIcons = UnicodeIcons;
static ASCII: AsciiIcons = AsciiIcons;

/// Configured icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
}

impl IconStyle {
    pub fn renderer(self) -> &'static dyn IconRenderer {
        match self {
            IconStyle::Unicode => &UNICODE,
            IconStyle::Ascii => &ASCII,
        }
    }
}
