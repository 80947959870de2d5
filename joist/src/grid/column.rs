//! Column descriptors and card field mappings.

use std::sync::Arc;

use crate::node::Node;

use super::value::CellValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Typed accessor projecting a record onto a cell value.
pub type CellAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell renderer.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Node + Send + Sync>;

/// Column configuration.
///
/// Columns are declarative and immutable for the lifetime of the grid.
/// A sortable column carries a typed accessor instead of a field name, so
/// sorting never reflects over the record.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name").sortable(|c: &Client| CellValue::text(&c.name)),
///     Column::new("revenue", "Revenue")
///         .align(Alignment::Right)
///         .sortable(|c: &Client| CellValue::opt(c.revenue, CellValue::number)),
///     Column::new("status", "Status").render(|c: &Client| Node::badge(&c.status, Tone::Success)),
/// ];
/// ```
pub struct Column<T> {
    /// Stable key referenced by sort state and card mappings
    pub key: String,
    /// Header label
    pub label: String,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether header clicks cycle sort on this column
    pub sortable: bool,
    /// Typed accessor; set by `sortable` or `accessor`
    pub accessor: Option<CellAccessor<T>>,
    /// Custom cell renderer; overrides the default text cell
    pub render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column.
    ///
    /// # Arguments
    /// * `key` - Stable key for sort state and card mappings
    /// * `label` - Header label
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Alignment::Left,
            sortable: false,
            accessor: None,
            render: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable with the given accessor.
    ///
    /// Sortable columns show a direction indicator in the header and cycle
    /// ascending, descending, unsorted on header clicks.
    pub fn sortable<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        self.sortable = true;
        self.accessor = Some(Arc::new(accessor));
        self
    }

    /// Attach an accessor without making the column sortable.
    ///
    /// The default cell rendering displays the accessor's value.
    pub fn accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    /// Attach a custom cell renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> Node + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Evaluate the accessor, absent values included.
    pub fn value_of(&self, record: &T) -> CellValue {
        self.accessor
            .as_ref()
            .map(|a| a(record))
            .unwrap_or(CellValue::Null)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            align: self.align,
            sortable: self.sortable,
            accessor: self.accessor.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("accessor", &self.accessor.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}

// ----- Card field mappings -----

/// Maps column keys onto card regions for the card presentations.
///
/// Unset title and subtitle fall back to the first and second column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardKeys {
    /// Column key for the card title
    pub title: Option<String>,
    /// Column key for the card subtitle
    pub subtitle: Option<String>,
    /// Column key for the status badge
    pub status: Option<String>,
    /// Column key for the compact list avatar
    pub avatar: Option<String>,
    /// Column key for the visual grid image
    pub image: Option<String>,
}

impl CardKeys {
    /// Create an empty mapping; cards fall back to the leading columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title column key.
    pub fn title(mut self, key: impl Into<String>) -> Self {
        self.title = Some(key.into());
        self
    }

    /// Set the subtitle column key.
    pub fn subtitle(mut self, key: impl Into<String>) -> Self {
        self.subtitle = Some(key.into());
        self
    }

    /// Set the status badge column key.
    pub fn status(mut self, key: impl Into<String>) -> Self {
        self.status = Some(key.into());
        self
    }

    /// Set the avatar column key.
    pub fn avatar(mut self, key: impl Into<String>) -> Self {
        self.avatar = Some(key.into());
        self
    }

    /// Set the image column key.
    pub fn image(mut self, key: impl Into<String>) -> Self {
        self.image = Some(key.into());
        self
    }

    /// Resolve the mapping against the column set.
    pub(crate) fn resolve<'a, T>(&self, columns: &'a [Column<T>]) -> CardFields<'a, T> {
        let by_key = |key: &Option<String>| {
            key.as_deref()
                .and_then(|k| columns.iter().find(|c| c.key == k))
        };
        CardFields {
            title: by_key(&self.title).or_else(|| columns.first()),
            subtitle: by_key(&self.subtitle).or_else(|| columns.get(1)),
            status: by_key(&self.status),
            avatar: by_key(&self.avatar),
            image: by_key(&self.image),
        }
    }
}

/// Columns resolved from a [`CardKeys`] mapping.
pub(crate) struct CardFields<'a, T> {
    pub title: Option<&'a Column<T>>,
    pub subtitle: Option<&'a Column<T>>,
    pub status: Option<&'a Column<T>>,
    pub avatar: Option<&'a Column<T>>,
    pub image: Option<&'a Column<T>>,
}
