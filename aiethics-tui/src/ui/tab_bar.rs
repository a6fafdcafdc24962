//! Tab bar: one tab per registered panel, active tab filled.
//!
//! Tabs are laid out left to right as `" {glyph} {name} "` separated by a
//! one-cell divider. `tab_regions` is the single source of that geometry; the
//! renderer and mouse hit-testing both use it.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aiethics_core::{registry, IconSize, IconStyle, Panel, PanelId};

use crate::app::AppState;
use crate::theme;

const DIVIDER: &str = "│";

fn label(panel: &Panel, icons: IconStyle) -> String {
    let glyph = icons.renderer().glyph(panel.icon, IconSize::Regular);
    format!(" {glyph} {} ", panel.display_name)
}

/// Screen rect of each visible tab, in registry order. Tabs that do not fit
/// are truncated at the right edge or omitted.
pub fn tab_regions(area: Rect, icons: IconStyle) -> Vec<(PanelId, Rect)> {
    let right = area.x.saturating_add(area.width);
    let divider = Span::raw(DIVIDER).width() as u16;
    let mut regions = Vec::with_capacity(registry().len());
    let mut x = area.x;

    for panel in registry() {
        if x >= right || area.height == 0 {
            break;
        }
        let width = Span::raw(label(panel, icons)).width() as u16;
        let visible = width.min(right - x);
        regions.push((panel.id, Rect::new(x, area.y, visible, 1)));
        x = x.saturating_add(width).saturating_add(divider);
    }
    regions
}

/// Panel whose tab covers the cell at (`column`, `row`).
pub fn tab_at(area: Rect, icons: IconStyle, column: u16, row: u16) -> Option<PanelId> {
    if row != area.y {
        return None;
    }
    tab_regions(area, icons)
        .into_iter()
        .find(|(_, r)| column >= r.x && column < r.x + r.width)
        .map(|(id, _)| id)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.active_panel();
    let mut spans: Vec<Span> = Vec::new();

    for (i, panel) in registry().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, theme::muted()));
        }
        spans.push(Span::styled(
            label(panel, app.icons),
            theme::tab(panel.id == active),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_are_ordered_and_disjoint() {
        let area = Rect::new(0, 3, 200, 1);
        let regions = tab_regions(area, IconStyle::Ascii);
        assert_eq!(regions.len(), registry().len());
        for w in regions.windows(2) {
            let (_, a) = w[0];
            let (_, b) = w[1];
            assert_eq!(a.x + a.width + 1, b.x);
        }
        assert_eq!(regions[0].1.x, 0);
        // " [=] Overview "
        assert_eq!(regions[0].1.width, 14);
    }

    #[test]
    fn hit_testing() {
        let area = Rect::new(0, 3, 200, 1);
        let regions = tab_regions(area, IconStyle::Ascii);
        for (id, r) in &regions {
            assert_eq!(tab_at(area, IconStyle::Ascii, r.x, 3), Some(*id));
            assert_eq!(tab_at(area, IconStyle::Ascii, r.x + r.width - 1, 3), Some(*id));
        }
        // Divider cell between the first two tabs.
        let gap = regions[0].1.x + regions[0].1.width;
        assert_eq!(tab_at(area, IconStyle::Ascii, gap, 3), None);
        // Wrong row.
        assert_eq!(tab_at(area, IconStyle::Ascii, 1, 4), None);
    }

    #[test]
    fn narrow_terminal_truncates() {
        let area = Rect::new(0, 0, 20, 1);
        let regions = tab_regions(area, IconStyle::Ascii);
        assert_eq!(regions.len(), 2);
        let (_, last) = regions[1];
        assert_eq!(last.x + last.width, 20);
    }
}
