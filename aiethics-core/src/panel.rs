//! Fixed panel registry.
//!
//! Five panels, created once, never mutated. Registry order is the tab order
//! and the first entry is the default selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::selector::SelectionError;

/// Identifier of a registered panel.
///
/// The set is closed: every value of this enum is a registered panel, so a
/// `PanelId` can never name a missing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Overview,
    Part1,
    Part2,
    Part3,
    Part4,
}

impl PanelId {
    /// All ids in registry order.
    pub const ALL: [PanelId; 5] = [
        PanelId::Overview,
        PanelId::Part1,
        PanelId::Part2,
        PanelId::Part3,
        PanelId::Part4,
    ];

    /// The panel selected when a session starts.
    pub const fn default_panel() -> Self {
        PanelId::Overview
    }

    /// Short token used on the command line and in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Overview => "overview",
            PanelId::Part1 => "part1",
            PanelId::Part2 => "part2",
            PanelId::Part3 => "part3",
            PanelId::Part4 => "part4",
        }
    }

    /// Position in the registry (0-based).
    pub fn index(self) -> usize {
        match self {
            PanelId::Overview => 0,
            PanelId::Part1 => 1,
            PanelId::Part2 => 2,
            PanelId::Part3 => 3,
            PanelId::Part4 => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Next panel in registry order, wrapping to the first.
    pub fn next(self) -> PanelId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous panel in registry order, wrapping to the last.
    pub fn prev(self) -> PanelId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Registry entry for this id.
    pub fn panel(self) -> &'static Panel {
        &REGISTRY[self.index()]
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::default_panel()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownPanel(s.to_string()))
    }
}

/// Symbolic icon reference. Turning one into a glyph is the job of an
/// [`IconRenderer`](crate::icons::IconRenderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    BookOpen,
    Brain,
    FileText,
    Code,
    Shield,
}

/// One selectable section of the assignment viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub id: PanelId,
    pub display_name: &'static str,
    pub icon: Icon,
}

static REGISTRY: [Panel; 5] = [
    Panel {
        id: PanelId::Overview,
        display_name: "Overview",
        icon: Icon::BookOpen,
    },
    Panel {
        id: PanelId::Part1,
        display_name: "Part 1: Theory",
        icon: Icon::Brain,
    },
    Panel {
        id: PanelId::Part2,
        display_name: "Part 2: Cases",
        icon: Icon::FileText,
    },
    Panel {
        id: PanelId::Part3,
        display_name: "Part 3: Audit",
        icon: Icon::Code,
    },
    Panel {
        id: PanelId::Part4,
        display_name: "Part 4: Reflection",
        icon: Icon::Shield,
    },
];

/// The full registry in display order.
pub fn registry() -> &'static [Panel] {
    &REGISTRY
}
