//! Indigo theme tokens for the assignment viewer.
//!
//! # Color Palette
//! - **Accent**: Indigo (active tab, headings, focus)
//! - **Info**: Sky blue (informational callouts)
//! - **Positive**: Green (fixes, recommended practice)
//! - **Caution**: Amber (expected findings, warnings)
//! - **Critical**: Red (risks, sources of bias)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

use aiethics_core::Tone;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    /// Foreground drawn on top of an `accent` background.
    pub on_accent: Color,
    pub info: Color,
    pub positive: Color,
    pub caution: Color,
    pub critical: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::indigo()
    }
}

impl Theme {
    pub const fn indigo() -> Self {
        Self {
            accent: Color::Rgb(99, 102, 241),
            on_accent: Color::White,
            info: Color::Rgb(56, 189, 248),
            positive: Color::Rgb(34, 197, 94),
            caution: Color::Rgb(234, 179, 8),
            critical: Color::Rgb(239, 68, 68),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::Reset,
        }
    }

    /// Colour for a content tone.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Plain => self.text_primary,
            Tone::Accent => self.accent,
            Tone::Info => self.info,
            Tone::Positive => self.positive,
            Tone::Caution => self.caution,
            Tone::Critical => self.critical,
        }
    }
}

const THEME: Theme = Theme::indigo();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.caution)
}

/// Heading style for a tone; plain headings still render bold.
pub fn heading(tone: Tone) -> Style {
    Style::default()
        .fg(THEME.tone(tone))
        .add_modifier(Modifier::BOLD)
}

pub fn tab(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(THEME.on_accent)
            .bg(THEME.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        muted()
    }
}

pub fn panel_border() -> Style {
    accent()
}
