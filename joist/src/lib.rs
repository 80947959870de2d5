//! joist - a renderer-independent data table presentation engine.
//!
//! The engine takes an already-filtered record collection plus a declarative
//! column/feature configuration and keeps sorting, pagination,
//! multi-selection, drag reordering, favorites promotion, and the
//! table-vs-cards view switch mutually consistent. Each render pass produces
//! a [`node::Node`] value tree that any renderer can consume; no rendering
//! technology is assumed.
//!
//! # Example
//!
//! ```ignore
//! use joist::prelude::*;
//!
//! #[derive(Clone)]
//! struct Client {
//!     id: String,
//!     name: String,
//! }
//!
//! impl GridRow for Client {
//!     fn identity(&self) -> String { self.id.clone() }
//!     fn display_name(&self) -> String { self.name.clone() }
//! }
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(|c: &Client| CellValue::text(&c.name)),
//! ];
//! let grid = DataGrid::new(GridConfig::new(columns).selectable());
//! grid.set_records(clients);
//! let tree = grid.render();
//! ```

pub mod debounce;
pub mod error;
pub mod events;
pub mod grid;
pub mod node;
pub mod notify;
pub mod style;
pub mod viewport;

pub mod prelude {
    pub use crate::debounce::Debouncer;
    pub use crate::error::ActionError;
    pub use crate::events::EventResult;
    pub use crate::grid::{
        Alignment, BulkAction, CardKeys, CardStyle, CellValue, Column, DEFAULT_PAGE_SIZE,
        DataGrid, DeleteConfirmation, Direction, GridConfig, GridId, GridRow, PageView,
        SelectionSet, SortState, ViewMode, paginate, resolve_card_style, resolve_mode,
        resolve_sort, splice_page,
    };
    pub use crate::node::{Align, Border, Justify, Layout, Node, Size};
    pub use crate::notify::{NotifyReceiver, Notifier};
    pub use crate::style::{Style, Tone};
    pub use crate::viewport::{
        NARROW_BREAKPOINT, SharedViewport, StaticViewport, ViewportObserver, ViewportSize,
        ViewportSubscription,
    };
}
