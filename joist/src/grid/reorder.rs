//! Manual reordering: drag drafts and page splicing.

use std::ops::Range;
use std::time::Duration;

use tokio::time::Instant;

/// Quiet period before a committed order is handed to the persistence
/// handler. Drops inside the window supersede the pending commit.
pub const REORDER_DEBOUNCE: Duration = Duration::from_millis(500);

/// Window after a drop during which row clicks are ignored, so releasing
/// a drag does not also activate the row under the pointer.
pub const CLICK_SUPPRESS_WINDOW: Duration = Duration::from_millis(100);

/// In-progress drag over the current page.
///
/// The draft holds the page's records in their provisional order; the rest
/// of the collection is untouched until the drop splices the page back in.
pub(crate) struct ReorderState<T> {
    draft: Option<Vec<T>>,
    drag_index: Option<usize>,
    last_drop: Option<Instant>,
}

impl<T> Default for ReorderState<T> {
    fn default() -> Self {
        Self {
            draft: None,
            drag_index: None,
            last_drop: None,
        }
    }
}

impl<T> ReorderState<T> {
    /// Start a drag at `index` within the given page order.
    ///
    /// Returns `false` when the index is out of range.
    pub fn begin(&mut self, page_records: Vec<T>, index: usize) -> bool {
        if index >= page_records.len() {
            return false;
        }
        self.draft = Some(page_records);
        self.drag_index = Some(index);
        true
    }

    /// Move the dragged record to `to` within the draft.
    pub fn move_to(&mut self, to: usize) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        let Some(from) = self.drag_index else {
            return;
        };
        let to = to.min(draft.len().saturating_sub(1));
        if from == to {
            return;
        }
        let record = draft.remove(from);
        draft.insert(to, record);
        self.drag_index = Some(to);
    }

    /// End the drag, taking the draft and starting the click suppression
    /// window.
    pub fn finish(&mut self) -> Option<Vec<T>> {
        self.drag_index = None;
        let draft = self.draft.take();
        if draft.is_some() {
            self.last_drop = Some(Instant::now());
        }
        draft
    }

    /// Abandon the drag without committing.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.drag_index = None;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.draft.is_some()
    }

    /// Index of the dragged record within the draft.
    pub fn drag_index(&self) -> Option<usize> {
        self.drag_index
    }

    /// The provisional page order, while dragging.
    pub fn draft(&self) -> Option<&[T]> {
        self.draft.as_deref()
    }

    /// Whether a drop landed within the given window.
    pub fn recently_dropped(&self, within: Duration) -> bool {
        self.last_drop
            .map(|t| t.elapsed() < within)
            .unwrap_or(false)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReorderState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderState")
            .field("dragging", &self.is_dragging())
            .field("drag_index", &self.drag_index)
            .finish()
    }
}

/// Rebuild the full order with one page replaced.
///
/// Records before and after the page keep their positions; the page's slots
/// are filled with `page_order`. The range is bounded by the record count.
pub fn splice_page<T: Clone>(full: &[T], range: Range<usize>, page_order: &[T]) -> Vec<T> {
    let start = range.start.min(full.len());
    let end = range.end.clamp(start, full.len());
    let mut next = Vec::with_capacity(full.len() - (end - start) + page_order.len());
    next.extend_from_slice(&full[..start]);
    next.extend_from_slice(page_order);
    next.extend_from_slice(&full[end..]);
    next
}
