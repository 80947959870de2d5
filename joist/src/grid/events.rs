//! Action dispatch.
//!
//! Rendered nodes carry action tags; a host feeds the tag of the activated
//! node back through [`DataGrid::handle_action`]. Tags are stable strings,
//! so hosts can also synthesize them, which is what the tests do.

use log::warn;

use crate::events::EventResult;

use super::row::GridRow;
use super::state::DataGrid;

impl<T: GridRow> DataGrid<T> {
    /// Dispatch an action tag produced by [`render`](Self::render).
    ///
    /// Deletion and bulk actions run on detached tasks; their outcome lands
    /// in [`last_error`](Self::last_error) rather than the return value.
    pub fn handle_action(&self, action: &str) -> EventResult {
        if let Some(id) = action.strip_prefix("row:") {
            return self.click_row(id);
        }
        if let Some(id) = action.strip_prefix("select:") {
            self.toggle_select(id);
            return EventResult::Consumed;
        }
        if let Some(key) = action.strip_prefix("sort:") {
            self.toggle_sort(key);
            return EventResult::Consumed;
        }
        if let Some(id) = action.strip_prefix("favorite:") {
            self.toggle_favorite(id);
            return EventResult::Consumed;
        }
        if let Some(index) = action.strip_prefix("drag:") {
            let Ok(index) = index.parse::<usize>() else {
                warn!("{}: bad drag index in '{action}'", self.id());
                return EventResult::Ignored;
            };
            return self.drag_start(index);
        }
        if let Some(index) = action.strip_prefix("bulk:") {
            let Ok(index) = index.parse::<usize>() else {
                warn!("{}: bad bulk index in '{action}'", self.id());
                return EventResult::Ignored;
            };
            let grid = self.clone();
            tokio::spawn(async move {
                let _ = grid.run_bulk_action(index).await;
            });
            return EventResult::Consumed;
        }
        match action {
            "select-page" => {
                self.toggle_page_selection();
                EventResult::Consumed
            }
            "select-all" => {
                self.select_all();
                EventResult::Consumed
            }
            "clear-selection" => {
                self.clear_selection();
                EventResult::Consumed
            }
            "delete-selected" => {
                self.request_delete_selected();
                EventResult::Consumed
            }
            "confirm-delete" => {
                let grid = self.clone();
                tokio::spawn(async move {
                    let _ = grid.delete_selected().await;
                });
                EventResult::Consumed
            }
            "cancel-delete" => {
                self.cancel_delete();
                EventResult::Consumed
            }
            "dismiss-error" => {
                self.dismiss_error();
                EventResult::Consumed
            }
            "page-next" => {
                self.next_page();
                EventResult::Consumed
            }
            "page-prev" => {
                self.prev_page();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
