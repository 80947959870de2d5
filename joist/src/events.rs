//! Event handling result types.
//!
//! The grid exposes pointer-level entry points (`click_row`, `drag_start`,
//! `handle_action`, ...) and reports through [`EventResult`] whether it
//! acted on the event, so hosts can compose the grid with their
//! surrounding event handling.

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation; route subsequent drag events here.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
