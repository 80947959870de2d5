//! View mode and card style resolution.

use crate::viewport::ViewportSize;

/// Top-level presentation of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Rows and columns with headers
    Table,
    /// Card presentation, styled by [`CardStyle`]
    Cards,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Cards => "cards",
        }
    }
}

/// How cards are laid out when the grid is in card mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Single column of avatar-fronted rows, for narrow viewports
    CompactList,
    /// Image-fronted cards in a column grid, for wide viewports
    VisualGrid,
}

impl CardStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStyle::CompactList => "compact-list",
            CardStyle::VisualGrid => "visual-grid",
        }
    }
}

/// Resolve the view mode.
///
/// An explicit mode always wins; otherwise narrow viewports get cards and
/// wide ones the table.
pub fn resolve_mode(forced: Option<ViewMode>, viewport: ViewportSize) -> ViewMode {
    if let Some(mode) = forced {
        return mode;
    }
    if viewport.is_narrow() {
        ViewMode::Cards
    } else {
        ViewMode::Table
    }
}

/// Resolve the card style from the viewport alone.
///
/// The style keeps following the viewport even when card mode was forced,
/// so a forced-cards grid still switches between the compact list and the
/// visual grid as the viewport crosses the breakpoint.
pub fn resolve_card_style(viewport: ViewportSize) -> CardStyle {
    if viewport.is_narrow() {
        CardStyle::CompactList
    } else {
        CardStyle::VisualGrid
    }
}

/// Column count for the visual grid at the given viewport width.
pub fn visual_grid_columns(width: u32) -> usize {
    match width {
        0..=1023 => 2,
        1024..=1439 => 3,
        1440..=1919 => 4,
        _ => 5,
    }
}
