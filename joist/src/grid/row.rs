//! GridRow trait for record identity.

/// Trait for records presentable in a `DataGrid`.
///
/// The engine treats records as opaque; this trait and the column
/// accessors are its only windows into them.
///
/// # Example
///
/// ```ignore
/// impl GridRow for Client {
///     fn identity(&self) -> String { self.id.clone() }
///     fn display_name(&self) -> String { self.name.clone() }
/// }
/// ```
pub trait GridRow: Send + Sync + Clone + 'static {
    /// Stable, unique identifier for this record.
    ///
    /// Used to track selection across sorts, pages, and refetches.
    fn identity(&self) -> String;

    /// Human-readable name shown in delete-confirmation summaries.
    fn display_name(&self) -> String {
        self.identity()
    }
}
