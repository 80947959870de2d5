//! Node types for the view tree.
//!
//! The engine's render output is a plain value tree. Interactive nodes
//! (buttons, checkboxes, click targets) carry an `action` tag naming the
//! grid operation a click maps onto; renderers dispatch those back to the
//! grid's event entry points and stay free of engine logic.

mod layout;

pub use layout::{Align, Border, Justify, Layout, Size};

use crate::style::{Style, Tone};

/// A node in the view tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Stack (z-axis layering, later children on top)
    Stack {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Clickable button
    Button {
        /// Button label
        label: String,
        /// Grid operation this button maps onto
        action: String,
        /// Style
        style: Style,
    },

    /// Tri-state selection checkbox
    Checkbox {
        /// Fully checked
        checked: bool,
        /// Partially checked (page has both selected and unselected rows)
        indeterminate: bool,
        /// Grid operation a toggle maps onto
        action: String,
    },

    /// Click target wrapping arbitrary content
    Clickable {
        child: Box<Node>,
        /// Grid operation a click maps onto
        action: String,
    },

    /// Status badge
    Badge { label: String, tone: Tone },

    /// Image reference (avatar or card front); renderers resolve `source`
    Image { source: String, alt: String },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a column node
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a column node with style and layout
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Create a row node
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Create a stack node
    pub fn stack(children: Vec<Node>) -> Self {
        Self::Stack {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a button node
    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            action: action.into(),
            style: Style::new(),
        }
    }

    /// Create a button node with style
    pub fn button_styled(
        label: impl Into<String>,
        action: impl Into<String>,
        style: Style,
    ) -> Self {
        Self::Button {
            label: label.into(),
            action: action.into(),
            style,
        }
    }

    /// Create a checkbox node
    pub fn checkbox(checked: bool, indeterminate: bool, action: impl Into<String>) -> Self {
        Self::Checkbox {
            checked,
            indeterminate,
            action: action.into(),
        }
    }

    /// Wrap a node in a click target
    pub fn clickable(action: impl Into<String>, child: Node) -> Self {
        Self::Clickable {
            child: Box::new(child),
            action: action.into(),
        }
    }

    /// Create a badge node
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Create an image node
    pub fn image(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            source: source.into(),
            alt: alt.into(),
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Collect all text content from this node and its children (in tree order)
    pub fn collect_texts(&self, out: &mut Vec<String>) {
        match self {
            Self::Text { content, .. } => out.push(content.clone()),
            Self::Button { label, .. } | Self::Badge { label, .. } => out.push(label.clone()),
            Self::Column { children, .. }
            | Self::Row { children, .. }
            | Self::Stack { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
            Self::Clickable { child, .. } => child.collect_texts(out),
            _ => {}
        }
    }

    /// Get all text content in tree order
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    /// Find the first interactive node carrying the given action tag
    pub fn find_action(&self, action: &str) -> Option<&Node> {
        match self {
            Self::Button { action: a, .. } | Self::Checkbox { action: a, .. } if a == action => {
                Some(self)
            }
            Self::Clickable { child, action: a } => {
                if a == action {
                    Some(self)
                } else {
                    child.find_action(action)
                }
            }
            Self::Column { children, .. }
            | Self::Row { children, .. }
            | Self::Stack { children, .. } => {
                children.iter().find_map(|c| c.find_action(action))
            }
            _ => None,
        }
    }

    /// Count nodes matching a predicate in this subtree
    pub fn count_where(&self, pred: &dyn Fn(&Node) -> bool) -> usize {
        let own = usize::from(pred(self));
        match self {
            Self::Column { children, .. }
            | Self::Row { children, .. }
            | Self::Stack { children, .. } => {
                own + children.iter().map(|c| c.count_where(pred)).sum::<usize>()
            }
            Self::Clickable { child, .. } => own + child.count_where(pred),
            _ => own,
        }
    }
}
