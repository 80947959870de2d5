//! The data grid: state, transformations and presentation.
//!
//! A [`DataGrid`] owns one record collection and the presentation state
//! layered over it. The pipeline from collection to screen is fixed:
//! favorites promotion, column sort, pagination window, then composition
//! into a [`Node`](crate::node::Node) tree in the resolved view mode. Every
//! mutation goes through an operation on the handle, so the pieces can
//! never disagree about what is shown.
//!
//! The transformation steps are also exposed as free functions
//! ([`resolve_sort`], [`paginate`], [`splice_page`], [`resolve_mode`]) for
//! callers that want the semantics without the state.

mod column;
mod config;
mod events;
mod page;
mod render;
mod reorder;
mod row;
mod selection;
mod sort;
mod state;
mod value;
mod view_mode;

pub use column::{Alignment, CardKeys, CellAccessor, CellRenderer, Column};
pub use config::{
    BulkAction, BulkHandler, FavoritePredicate, GridConfig, RecordHandler, ReorderHandler,
};
pub use page::{DEFAULT_PAGE_SIZE, PageView, paginate};
pub use reorder::{CLICK_SUPPRESS_WINDOW, REORDER_DEBOUNCE, splice_page};
pub use row::GridRow;
pub use selection::SelectionSet;
pub use sort::{Direction, SortState, resolve_sort};
pub use state::{DataGrid, DeleteConfirmation, GridId};
pub use value::CellValue;
pub use view_mode::{CardStyle, ViewMode, resolve_card_style, resolve_mode, visual_grid_columns};
