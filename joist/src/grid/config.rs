//! Grid configuration.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::style::Tone;

use super::column::{CardKeys, Column};
use super::page::DEFAULT_PAGE_SIZE;
use super::view_mode::ViewMode;

/// Handler for operations over a batch of records.
///
/// Returns `Err` with a message when the operation fails; the grid keeps
/// the current selection in that case.
pub type BulkHandler<T> = Arc<dyn Fn(Vec<T>) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Handler receiving the full record order after a committed reorder.
pub type ReorderHandler<T> = Arc<dyn Fn(Vec<T>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Handler invoked with a single record.
pub type RecordHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Predicate marking records as favorites.
pub type FavoritePredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A caller-defined action over the selected records.
pub struct BulkAction<T> {
    /// Button label
    pub label: String,
    /// Button tone
    pub tone: Tone,
    /// Action handler; receives the selected records
    pub handler: BulkHandler<T>,
}

impl<T> BulkAction<T> {
    /// Create a bulk action.
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Vec<T>) -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            tone: Tone::Primary,
            handler: Arc::new(handler),
        }
    }

    /// Set the button tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl<T> Clone for BulkAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            tone: self.tone,
            handler: self.handler.clone(),
        }
    }
}

impl<T> std::fmt::Debug for BulkAction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkAction")
            .field("label", &self.label)
            .field("tone", &self.tone)
            .finish()
    }
}

/// Configuration for a [`DataGrid`](super::DataGrid).
///
/// Built once and handed to [`DataGrid::new`](super::DataGrid::new);
/// everything else is runtime state.
///
/// # Examples
///
/// ```ignore
/// let config = GridConfig::new(columns)
///     .selectable()
///     .reorderable()
///     .page_size(25)
///     .on_delete(|clients| async move { api::delete(clients).await }.boxed());
/// let grid = DataGrid::new(config);
/// ```
pub struct GridConfig<T> {
    /// Column set, in display order
    pub columns: Vec<Column<T>>,
    /// Records per page
    pub page_size: usize,
    /// Whether rows can be selected
    pub selectable: bool,
    /// Whether rows can be dragged into a new order
    pub reorderable: bool,
    /// Whether favorites are grouped before the rest
    pub favorites_first: bool,
    /// Predicate marking favorite records
    pub is_favorite: Option<FavoritePredicate<T>>,
    /// Column keys for the card presentations
    pub card_keys: CardKeys,
    /// Forced view mode; `None` follows the viewport
    pub mode: Option<ViewMode>,
    /// Message shown when there are no records
    pub empty_message: String,
    /// Row activation handler, invoked outside selection mode
    pub on_activate: Option<RecordHandler<T>>,
    /// Favorite toggle handler
    pub on_toggle_favorite: Option<RecordHandler<T>>,
    /// Delete handler for the selected records
    pub on_delete: Option<BulkHandler<T>>,
    /// Persistence handler for committed reorders
    pub on_reorder: Option<ReorderHandler<T>>,
    /// Caller-defined actions over the selection
    pub bulk_actions: Vec<BulkAction<T>>,
}

impl<T> GridConfig<T> {
    /// Create a configuration with the given columns.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            page_size: DEFAULT_PAGE_SIZE,
            selectable: false,
            reorderable: false,
            favorites_first: false,
            is_favorite: None,
            card_keys: CardKeys::new(),
            mode: None,
            empty_message: "No records found".to_string(),
            on_activate: None,
            on_toggle_favorite: None,
            on_delete: None,
            on_reorder: None,
            bulk_actions: Vec::new(),
        }
    }

    /// Set the page size. Zero is treated as one.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Enable row selection.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Enable manual reordering.
    pub fn reorderable(mut self) -> Self {
        self.reorderable = true;
        self
    }

    /// Group favorites before the rest of the records.
    pub fn favorites_first<F>(mut self, is_favorite: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.favorites_first = true;
        self.is_favorite = Some(Arc::new(is_favorite));
        self
    }

    /// Set the card field mapping.
    pub fn card_keys(mut self, keys: CardKeys) -> Self {
        self.card_keys = keys;
        self
    }

    /// Force a view mode instead of following the viewport.
    pub fn mode(mut self, mode: ViewMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the row activation handler.
    pub fn on_activate<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_activate = Some(Arc::new(handler));
        self
    }

    /// Set the favorite toggle handler.
    pub fn on_toggle_favorite<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_toggle_favorite = Some(Arc::new(handler));
        self
    }

    /// Set the delete handler.
    pub fn on_delete<F>(mut self, handler: F) -> Self
    where
        F: Fn(Vec<T>) -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static,
    {
        self.on_delete = Some(Arc::new(handler));
        self
    }

    /// Set the reorder persistence handler.
    pub fn on_reorder<F>(mut self, handler: F) -> Self
    where
        F: Fn(Vec<T>) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        self.on_reorder = Some(Arc::new(handler));
        self
    }

    /// Add a bulk action.
    pub fn bulk_action(mut self, action: BulkAction<T>) -> Self {
        self.bulk_actions.push(action);
        self
    }
}

impl<T> Clone for GridConfig<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            page_size: self.page_size,
            selectable: self.selectable,
            reorderable: self.reorderable,
            favorites_first: self.favorites_first,
            is_favorite: self.is_favorite.clone(),
            card_keys: self.card_keys.clone(),
            mode: self.mode,
            empty_message: self.empty_message.clone(),
            on_activate: self.on_activate.clone(),
            on_toggle_favorite: self.on_toggle_favorite.clone(),
            on_delete: self.on_delete.clone(),
            on_reorder: self.on_reorder.clone(),
            bulk_actions: self.bulk_actions.clone(),
        }
    }
}

impl<T> std::fmt::Debug for GridConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridConfig")
            .field("columns", &self.columns.len())
            .field("page_size", &self.page_size)
            .field("selectable", &self.selectable)
            .field("reorderable", &self.reorderable)
            .field("favorites_first", &self.favorites_first)
            .field("mode", &self.mode)
            .field("bulk_actions", &self.bulk_actions.len())
            .finish()
    }
}
