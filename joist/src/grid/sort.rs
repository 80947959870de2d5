//! Sort state and the sort resolver.

use std::cmp::Ordering;

use super::column::Column;
use super::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Header indicator for this direction.
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

/// Active sort, at most one column at a time.
///
/// Clicking a header cycles ascending, descending, unsorted. Clicking a
/// different header starts over at ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<(String, Direction)>,
}

impl SortState {
    /// Create an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cycle for the given column key.
    pub fn cycle(&mut self, key: &str) {
        self.active = match self.active.take() {
            Some((k, Direction::Ascending)) if k == key => Some((k, Direction::Descending)),
            Some((k, Direction::Descending)) if k == key => None,
            _ => Some((key.to_string(), Direction::Ascending)),
        };
    }

    /// Drop the active sort.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The active column key and direction, if any.
    pub fn active(&self) -> Option<(&str, Direction)> {
        self.active.as_ref().map(|(k, d)| (k.as_str(), *d))
    }

    /// The direction applied to the given column, if it is the active one.
    pub fn direction_of(&self, key: &str) -> Option<Direction> {
        match &self.active {
            Some((k, d)) if k == key => Some(*d),
            _ => None,
        }
    }

    /// Whether any column sort is active.
    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }
}

// ----- Resolver -----

/// Sort records in place according to the given state.
///
/// When favorites grouping is on, favorites are moved before the rest first,
/// preserving relative order within both groups. The column sort then runs
/// over the whole sequence; it is stable, so equal keys keep favorites ahead.
///
/// Absent values sort after present ones under either direction; the
/// direction only flips the comparison of present values. An unknown key or
/// a column without an accessor leaves the order untouched.
pub fn resolve_sort<T>(
    records: &mut [T],
    columns: &[Column<T>],
    sort: &SortState,
    favorites_first: bool,
    is_favorite: Option<&(dyn Fn(&T) -> bool + Send + Sync)>,
) {
    if favorites_first && let Some(fav) = is_favorite {
        records.sort_by_key(|r| !fav(r));
    }
    if let Some((key, direction)) = sort.active()
        && let Some(column) = columns.iter().find(|c| c.key == key)
        && let Some(accessor) = column.accessor.as_ref()
    {
        records.sort_by(|a, b| compare_directed(&accessor(a), &accessor(b), direction));
    }
}

/// Compare two cell values under a direction, absent values always last.
fn compare_directed(a: &CellValue, b: &CellValue, direction: Direction) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            Direction::Ascending => a.compare(b),
            Direction::Descending => a.compare(b).reverse(),
        },
    }
}
