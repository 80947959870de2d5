//! Grid identity, shared state and the operation surface.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, error, warn};

use crate::debounce::Debouncer;
use crate::error::ActionError;
use crate::events::EventResult;
use crate::notify::Notifier;
use crate::viewport::{ViewportObserver, ViewportSize, ViewportSubscription};

use super::config::{GridConfig, ReorderHandler};
use super::page::{PageView, paginate};
use super::reorder::{CLICK_SUPPRESS_WINDOW, REORDER_DEBOUNCE, ReorderState, splice_page};
use super::row::GridRow;
use super::selection::SelectionSet;
use super::sort::{SortState, resolve_sort};
use super::view_mode::{CardStyle, ViewMode, resolve_card_style, resolve_mode};

static GRID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Display names listed in the delete confirmation before truncating.
const MAX_CONFIRM_NAMES: usize = 10;

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn next() -> Self {
        Self(GRID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Pending delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    /// Display names of the records up for deletion, truncated
    pub names: Vec<String>,
    /// How many selected records are not listed in `names`
    pub overflow: usize,
    /// Total records up for deletion
    pub total: usize,
}

pub(crate) struct GridInner<T> {
    pub(crate) config: GridConfig<T>,
    pub(crate) records: Vec<T>,
    pub(crate) loading: bool,
    pub(crate) source_error: Option<String>,
    pub(crate) sort: SortState,
    pub(crate) current_page: usize,
    pub(crate) selection: SelectionSet,
    pub(crate) reorder: ReorderState<T>,
    pub(crate) mode_override: Option<ViewMode>,
    pub(crate) viewport: ViewportSize,
    pub(crate) confirm: Option<DeleteConfirmation>,
    pub(crate) last_error: Option<ActionError>,
}

/// Shared handle to a data grid.
///
/// Cheap to clone; all clones see the same state. Mutations set a dirty
/// flag and ping the notifier, if one is attached, so a host loop knows a
/// re-render is due.
pub struct DataGrid<T> {
    id: GridId,
    pub(crate) inner: Arc<RwLock<GridInner<T>>>,
    dirty: Arc<AtomicBool>,
    notifier: Arc<RwLock<Option<Notifier>>>,
    debounce: Debouncer,
    inflight: Arc<AtomicBool>,
}

impl<T: GridRow> DataGrid<T> {
    /// Create a grid with the given configuration and no records.
    pub fn new(config: GridConfig<T>) -> Self {
        let mode_override = config.mode;
        Self {
            id: GridId::next(),
            inner: Arc::new(RwLock::new(GridInner {
                config,
                records: Vec::new(),
                loading: false,
                source_error: None,
                sort: SortState::new(),
                current_page: 1,
                selection: SelectionSet::new(),
                reorder: ReorderState::default(),
                mode_override,
                viewport: ViewportSize::default(),
                confirm: None,
                last_error: None,
            })),
            dirty: Arc::new(AtomicBool::new(true)),
            notifier: Arc::new(RwLock::new(None)),
            debounce: Debouncer::new(REORDER_DEBOUNCE),
            inflight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> GridId {
        self.id
    }

    /// Attach a notifier pinged on every state change.
    pub fn set_notifier(&self, notifier: Notifier) {
        if let Ok(mut slot) = self.notifier.write() {
            *slot = Some(notifier);
        }
    }

    // ----- Records -----

    /// Replace the record collection.
    ///
    /// Clears the selection, any in-progress drag, the confirmation dialog
    /// and the source error, and clamps the current page to the new total.
    /// The active sort is kept.
    pub fn set_records(&self, records: Vec<T>) {
        if let Ok(mut grid) = self.inner.write() {
            debug!("{}: set {} records", self.id, records.len());
            grid.records = records;
            grid.loading = false;
            grid.source_error = None;
            grid.selection.clear();
            grid.reorder.cancel();
            grid.confirm = None;
            let total = page_view_locked(&grid).total_pages;
            if grid.current_page > total {
                warn!(
                    "{}: page {} past end, clamping to {}",
                    self.id, grid.current_page, total
                );
                grid.current_page = total;
            }
            self.mark_dirty();
        }
    }

    /// Set the loading flag. Loading grids render a skeleton.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut grid) = self.inner.write() {
            grid.loading = loading;
            self.mark_dirty();
        }
    }

    /// Record a data source failure. Clears the loading flag.
    pub fn set_source_error(&self, message: impl Into<String>) {
        if let Ok(mut grid) = self.inner.write() {
            let message = message.into();
            warn!("{}: source error: {message}", self.id);
            grid.loading = false;
            grid.source_error = Some(message);
            self.mark_dirty();
        }
    }

    /// The records in their canonical order.
    pub fn records(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|grid| grid.records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|grid| grid.records.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn loading(&self) -> bool {
        self.inner
            .read()
            .map(|grid| grid.loading)
            .unwrap_or_default()
    }

    pub fn source_error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|grid| grid.source_error.clone())
    }

    // ----- Sorting -----

    pub fn sort_state(&self) -> SortState {
        self.inner
            .read()
            .map(|grid| grid.sort.clone())
            .unwrap_or_default()
    }

    /// Cycle the sort on a column. Ignored for unknown or unsortable keys.
    ///
    /// Also ignored while a drag is in progress: the draft was cut from
    /// the current order and the drop splices back into that same order.
    pub fn toggle_sort(&self, key: &str) {
        if let Ok(mut grid) = self.inner.write() {
            if grid.reorder.is_dragging() {
                return;
            }
            let sortable = grid
                .config
                .columns
                .iter()
                .any(|c| c.key == key && c.sortable);
            if !sortable {
                return;
            }
            grid.sort.cycle(key);
            self.mark_dirty();
        }
    }

    /// Drop the active sort, returning to the canonical order.
    ///
    /// Ignored while a drag is in progress.
    pub fn clear_sort(&self) {
        if let Ok(mut grid) = self.inner.write()
            && !grid.reorder.is_dragging()
        {
            grid.sort.clear();
            self.mark_dirty();
        }
    }

    // ----- Pagination -----

    pub fn current_page(&self) -> usize {
        self.inner
            .read()
            .map(|grid| grid.current_page)
            .unwrap_or(1)
    }

    pub fn total_pages(&self) -> usize {
        self.page_view().total_pages
    }

    pub fn page_view(&self) -> PageView {
        self.inner
            .read()
            .map(|grid| page_view_locked(&grid))
            .unwrap_or_else(|_| paginate(0, 1, 1))
    }

    /// Go to a page, clamped into the valid range.
    ///
    /// Changing pages abandons any in-progress drag; an uncommitted draft
    /// does not follow the records off screen.
    pub fn set_page(&self, page: usize) {
        if let Ok(mut grid) = self.inner.write() {
            let total = page_view_locked(&grid).total_pages;
            let page = page.clamp(1, total);
            if page != grid.current_page {
                grid.reorder.cancel();
                grid.current_page = page;
                self.mark_dirty();
            }
        }
    }

    pub fn next_page(&self) {
        self.set_page(self.current_page().saturating_add(1));
    }

    pub fn prev_page(&self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    // ----- Derived order -----

    /// The full collection in presentation order.
    pub fn sorted_records(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|grid| sorted_locked(&grid))
            .unwrap_or_default()
    }

    /// The records on the current page, in presentation order.
    ///
    /// While a drag is in progress this is the provisional draft order.
    pub fn page_records(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|grid| page_records_locked(&grid))
            .unwrap_or_default()
    }

    /// Identities of every record, in canonical order.
    pub fn all_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|grid| grid.records.iter().map(|r| r.identity()).collect())
            .unwrap_or_default()
    }

    /// Identities of the records on the current page.
    pub fn page_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|grid| page_ids_locked(&grid))
            .unwrap_or_default()
    }

    // ----- Selection -----

    /// Toggle one record. Ignored when the grid is not selectable.
    pub fn toggle_select(&self, id: &str) {
        if let Ok(mut grid) = self.inner.write() {
            if !grid.config.selectable {
                return;
            }
            grid.selection.toggle(id);
            self.mark_dirty();
        }
    }

    /// Toggle the current page.
    ///
    /// Selects every record on the page unless all of them are already
    /// selected, in which case the page is deselected.
    pub fn toggle_page_selection(&self) {
        if let Ok(mut grid) = self.inner.write() {
            if !grid.config.selectable {
                return;
            }
            let ids = page_ids_locked(&grid);
            grid.selection.toggle_page(&ids);
            self.mark_dirty();
        }
    }

    /// Select every record in the collection.
    pub fn select_all(&self) {
        if let Ok(mut grid) = self.inner.write() {
            if !grid.config.selectable {
                return;
            }
            let ids: Vec<String> = grid.records.iter().map(|r| r.identity()).collect();
            grid.selection.replace_all(ids);
            self.mark_dirty();
        }
    }

    pub fn clear_selection(&self) {
        if let Ok(mut grid) = self.inner.write() {
            if grid.selection.is_empty() {
                return;
            }
            grid.selection.clear();
            self.mark_dirty();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|grid| grid.selection.contains(id))
            .unwrap_or_default()
    }

    pub fn selected_count(&self) -> usize {
        self.inner
            .read()
            .map(|grid| grid.selection.len())
            .unwrap_or_default()
    }

    /// Selected identities, in canonical record order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|grid| {
                grid.records
                    .iter()
                    .map(|r| r.identity())
                    .filter(|id| grid.selection.contains(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selected records, in canonical record order.
    pub fn selected_records(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|grid| selected_locked(&grid))
            .unwrap_or_default()
    }

    /// Whether every record in the collection is selected.
    pub fn all_selected(&self) -> bool {
        self.inner
            .read()
            .map(|grid| {
                let ids: Vec<String> = grid.records.iter().map(|r| r.identity()).collect();
                grid.selection.is_all_selected(&ids)
            })
            .unwrap_or_default()
    }

    pub fn page_fully_selected(&self) -> bool {
        self.inner
            .read()
            .map(|grid| {
                let ids = page_ids_locked(&grid);
                grid.selection.is_all_selected(&ids)
            })
            .unwrap_or_default()
    }

    pub fn page_partially_selected(&self) -> bool {
        self.inner
            .read()
            .map(|grid| {
                let ids = page_ids_locked(&grid);
                grid.selection.is_any_selected(&ids) && !grid.selection.is_all_selected(&ids)
            })
            .unwrap_or_default()
    }

    /// Whether row clicks toggle selection instead of activating.
    pub fn in_selection_mode(&self) -> bool {
        self.inner
            .read()
            .map(|grid| grid.config.selectable && !grid.selection.is_empty())
            .unwrap_or_default()
    }

    // ----- Row interaction -----

    /// Handle a click on a row.
    ///
    /// Clicks inside the post-drop suppression window are swallowed. In
    /// selection mode the click toggles the row; otherwise it goes to the
    /// activation handler.
    pub fn click_row(&self, id: &str) -> EventResult {
        let activation = {
            let Ok(mut grid) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if grid.reorder.recently_dropped(CLICK_SUPPRESS_WINDOW) {
                debug!("{}: click on {id} suppressed after drop", self.id);
                return EventResult::Consumed;
            }
            if grid.config.selectable && !grid.selection.is_empty() {
                grid.selection.toggle(id);
                self.mark_dirty();
                return EventResult::Consumed;
            }
            grid.config.on_activate.clone().and_then(|handler| {
                let record = grid.records.iter().find(|r| r.identity() == id).cloned()?;
                Some((handler, record))
            })
        };
        match activation {
            Some((handler, record)) => {
                handler(&record);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Relay a favorite toggle to the handler.
    pub fn toggle_favorite(&self, id: &str) {
        let payload = self.inner.read().ok().and_then(|grid| {
            let handler = grid.config.on_toggle_favorite.clone()?;
            let record = grid.records.iter().find(|r| r.identity() == id).cloned()?;
            Some((handler, record))
        });
        if let Some((handler, record)) = payload {
            handler(&record);
            self.mark_dirty();
        }
    }

    // ----- Reordering -----

    /// Start dragging the row at `index` on the current page.
    pub fn drag_start(&self, index: usize) -> EventResult {
        if let Ok(mut grid) = self.inner.write() {
            if !grid.config.reorderable || grid.loading {
                return EventResult::Ignored;
            }
            let view = page_view_locked(&grid);
            let sorted = sorted_locked(&grid);
            let page = sorted[view.range()].to_vec();
            if grid.reorder.begin(page, index) {
                self.mark_dirty();
                return EventResult::StartDrag;
            }
        }
        EventResult::Ignored
    }

    /// Move the dragged row to `to` within the page draft.
    pub fn drag_over(&self, to: usize) {
        if let Ok(mut grid) = self.inner.write()
            && grid.reorder.is_dragging()
        {
            grid.reorder.move_to(to);
            self.mark_dirty();
        }
    }

    /// Drop the dragged row, committing the draft.
    ///
    /// The draft replaces the page's slice of the presentation order and
    /// the result becomes the new canonical order; the column sort is
    /// cleared since the manual order supersedes it. Persistence is handed
    /// off after the debounce window.
    pub fn drag_drop(&self) {
        let mut committed = false;
        if let Ok(mut grid) = self.inner.write() {
            if !grid.reorder.is_dragging() {
                return;
            }
            let view = page_view_locked(&grid);
            let sorted = sorted_locked(&grid);
            if let Some(order) = grid.reorder.finish() {
                grid.records = splice_page(&sorted, view.range(), &order);
                grid.sort.clear();
                committed = true;
                self.mark_dirty();
            }
        }
        if committed {
            debug!("{}: reorder committed, scheduling persistence", self.id);
            self.schedule_commit();
        }
    }

    /// Abandon the drag without committing.
    pub fn cancel_drag(&self) {
        if let Ok(mut grid) = self.inner.write()
            && grid.reorder.is_dragging()
        {
            grid.reorder.cancel();
            self.mark_dirty();
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.inner
            .read()
            .map(|grid| grid.reorder.is_dragging())
            .unwrap_or_default()
    }

    pub fn drag_index(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|grid| grid.reorder.drag_index())
    }

    /// Whether a drop landed within the click suppression window.
    pub fn recently_dropped(&self) -> bool {
        self.inner
            .read()
            .map(|grid| grid.reorder.recently_dropped(CLICK_SUPPRESS_WINDOW))
            .unwrap_or_default()
    }

    fn schedule_commit(&self) {
        let Some(handler) = self
            .inner
            .read()
            .ok()
            .and_then(|grid| grid.config.on_reorder.clone())
        else {
            return;
        };
        let inner = Arc::clone(&self.inner);
        let inflight = Arc::clone(&self.inflight);
        // The spawned call is detached: once the window has elapsed a later
        // drop reschedules the debouncer but can no longer abort the call.
        self.debounce.schedule(async move {
            tokio::spawn(fire_commit(inner, handler, inflight));
        });
    }

    // ----- Deletion -----

    /// Open the delete confirmation for the current selection.
    ///
    /// Does nothing without a delete handler or a selection.
    pub fn request_delete_selected(&self) {
        if let Ok(mut grid) = self.inner.write() {
            if grid.config.on_delete.is_none() {
                return;
            }
            let names: Vec<String> = selected_locked(&grid)
                .iter()
                .map(|r| r.display_name())
                .collect();
            if names.is_empty() {
                return;
            }
            let total = names.len();
            let names: Vec<String> = names.into_iter().take(MAX_CONFIRM_NAMES).collect();
            let overflow = total - names.len();
            grid.confirm = Some(DeleteConfirmation {
                names,
                overflow,
                total,
            });
            self.mark_dirty();
        }
    }

    pub fn delete_confirmation(&self) -> Option<DeleteConfirmation> {
        self.inner.read().ok().and_then(|grid| grid.confirm.clone())
    }

    /// Close the confirmation without deleting.
    pub fn cancel_delete(&self) {
        if let Ok(mut grid) = self.inner.write()
            && grid.confirm.is_some()
        {
            grid.confirm = None;
            self.mark_dirty();
        }
    }

    /// Delete the selected records through the delete handler.
    ///
    /// On success the selection and the confirmation are cleared; the
    /// record collection itself is the data source's to refresh. On failure
    /// both are kept so the operation can be retried, and the error is
    /// surfaced via [`last_error`](Self::last_error).
    pub async fn delete_selected(&self) -> Result<(), ActionError> {
        let Some((handler, records)) = self.inner.read().ok().and_then(|grid| {
            let handler = grid.config.on_delete.clone()?;
            Some((handler, selected_locked(&grid)))
        }) else {
            return Ok(());
        };
        if records.is_empty() {
            self.cancel_delete();
            return Ok(());
        }
        let count = records.len();
        match handler(records).await {
            Ok(()) => {
                debug!("{}: deleted {count} records", self.id);
                if let Ok(mut grid) = self.inner.write() {
                    grid.selection.clear();
                    grid.confirm = None;
                    grid.last_error = None;
                    self.mark_dirty();
                }
                Ok(())
            }
            Err(message) => {
                error!("{}: delete failed: {message}", self.id);
                let error = ActionError::new("delete", message);
                if let Ok(mut grid) = self.inner.write() {
                    grid.last_error = Some(error.clone());
                    self.mark_dirty();
                }
                Err(error)
            }
        }
    }

    // ----- Bulk actions -----

    /// Run the bulk action at `index` over the selected records.
    ///
    /// The selection is cleared on success and kept on failure.
    pub async fn run_bulk_action(&self, index: usize) -> Result<(), ActionError> {
        let Some((action, records)) = self.inner.read().ok().and_then(|grid| {
            let action = grid.config.bulk_actions.get(index).cloned()?;
            Some((action, selected_locked(&grid)))
        }) else {
            warn!("{}: no bulk action at index {index}", self.id);
            return Ok(());
        };
        if records.is_empty() {
            return Ok(());
        }
        match (action.handler)(records).await {
            Ok(()) => {
                if let Ok(mut grid) = self.inner.write() {
                    grid.selection.clear();
                    grid.last_error = None;
                    self.mark_dirty();
                }
                Ok(())
            }
            Err(message) => {
                error!("{}: bulk action '{}' failed: {message}", self.id, action.label);
                let error = ActionError::new(action.label.as_str(), message);
                if let Ok(mut grid) = self.inner.write() {
                    grid.last_error = Some(error.clone());
                    self.mark_dirty();
                }
                Err(error)
            }
        }
    }

    // ----- Errors -----

    /// The most recent action failure, until dismissed.
    pub fn last_error(&self) -> Option<ActionError> {
        self.inner
            .read()
            .ok()
            .and_then(|grid| grid.last_error.clone())
    }

    pub fn dismiss_error(&self) {
        if let Ok(mut grid) = self.inner.write()
            && grid.last_error.is_some()
        {
            grid.last_error = None;
            self.mark_dirty();
        }
    }

    // ----- Viewport and view mode -----

    pub fn set_viewport(&self, size: ViewportSize) {
        if let Ok(mut grid) = self.inner.write()
            && grid.viewport != size
        {
            grid.viewport = size;
            self.mark_dirty();
        }
    }

    pub fn viewport(&self) -> ViewportSize {
        self.inner
            .read()
            .map(|grid| grid.viewport)
            .unwrap_or_default()
    }

    /// Follow an observer's viewport for as long as the subscription lives.
    pub fn watch_viewport(&self, observer: &dyn ViewportObserver) -> ViewportSubscription {
        self.set_viewport(observer.current());
        let grid = self.clone();
        observer.subscribe(Box::new(move |size| grid.set_viewport(size)))
    }

    /// Force a view mode, or `None` to follow the viewport again.
    pub fn set_mode(&self, mode: Option<ViewMode>) {
        if let Ok(mut grid) = self.inner.write()
            && grid.mode_override != mode
        {
            grid.mode_override = mode;
            self.mark_dirty();
        }
    }

    /// The resolved view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.inner
            .read()
            .map(|grid| resolve_mode(grid.mode_override, grid.viewport))
            .unwrap_or(ViewMode::Table)
    }

    /// The card style for the current viewport.
    pub fn card_style(&self) -> CardStyle {
        self.inner
            .read()
            .map(|grid| resolve_card_style(grid.viewport))
            .unwrap_or(CardStyle::VisualGrid)
    }

    // ----- Dirty tracking -----

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        if let Ok(slot) = self.notifier.read()
            && let Some(notifier) = slot.as_ref()
        {
            notifier.notify();
        }
    }
}

/// Issue the reorder persistence call with a fresh snapshot.
///
/// One call at a time: a commit that fires while an earlier call is still
/// in flight waits out another window instead of overlapping it. A call
/// that has been issued is never cancelled.
async fn fire_commit<T: GridRow>(
    inner: Arc<RwLock<GridInner<T>>>,
    handler: ReorderHandler<T>,
    inflight: Arc<AtomicBool>,
) {
    while inflight.swap(true, Ordering::SeqCst) {
        tokio::time::sleep(REORDER_DEBOUNCE).await;
    }
    let _clear = ClearOnDrop(inflight);
    let records = inner
        .read()
        .map(|grid| grid.records.clone())
        .unwrap_or_default();
    handler(records).await;
}

/// Clears the in-flight flag on drop, so a handler that panics does not
/// leave the flag set and starve every later commit.
struct ClearOnDrop(Arc<AtomicBool>);

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ----- Locked helpers -----

pub(crate) fn page_view_locked<T>(grid: &GridInner<T>) -> PageView {
    paginate(grid.records.len(), grid.config.page_size, grid.current_page)
}

pub(crate) fn sorted_locked<T: GridRow>(grid: &GridInner<T>) -> Vec<T> {
    let mut records = grid.records.clone();
    resolve_sort(
        &mut records,
        &grid.config.columns,
        &grid.sort,
        grid.config.favorites_first,
        grid.config.is_favorite.as_deref(),
    );
    records
}

pub(crate) fn page_records_locked<T: GridRow>(grid: &GridInner<T>) -> Vec<T> {
    if let Some(draft) = grid.reorder.draft() {
        return draft.to_vec();
    }
    let view = page_view_locked(grid);
    let sorted = sorted_locked(grid);
    sorted[view.range()].to_vec()
}

pub(crate) fn page_ids_locked<T: GridRow>(grid: &GridInner<T>) -> Vec<String> {
    page_records_locked(grid)
        .iter()
        .map(|r| r.identity())
        .collect()
}

pub(crate) fn selected_locked<T: GridRow>(grid: &GridInner<T>) -> Vec<T> {
    grid.records
        .iter()
        .filter(|r| grid.selection.contains(&r.identity()))
        .cloned()
        .collect()
}

// ===== Trait impls =====

impl<T> Clone for DataGrid<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            notifier: Arc::clone(&self.notifier),
            debounce: self.debounce.clone(),
            inflight: Arc::clone(&self.inflight),
        }
    }
}

impl<T> std::fmt::Debug for DataGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (records, page) = self
            .inner
            .read()
            .map(|grid| (grid.records.len(), grid.current_page))
            .unwrap_or((0, 0));
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .field("records", &records)
            .field("page", &page)
            .field("dirty", &self.dirty.load(Ordering::SeqCst))
            .finish()
    }
}
