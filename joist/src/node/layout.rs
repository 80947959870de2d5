//! Layout types and properties for nodes.

/// Content alignment on the main axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Content alignment on the cross axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

/// Border style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    /// Fixed size in layout units
    Fixed(u16),
    /// Percentage of parent
    Percent(f32),
    /// Flex grow factor
    Flex(u16),
    /// Auto size based on content
    #[default]
    Auto,
}

/// Layout properties for a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Height
    pub height: Size,
    /// Padding (all sides)
    pub padding: u16,
    /// Gap between children
    pub gap: u16,
    /// Content justification (main axis)
    pub justify: Justify,
    /// Content alignment (cross axis)
    pub align: Align,
    /// Border style
    pub border: Border,
}
