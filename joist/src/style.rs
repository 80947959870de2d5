/// Semantic tone for actions, badges, and banners.
///
/// The engine never picks concrete colors; renderers map tones onto their
/// own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// Stable name, usable as a CSS class suffix or theme lookup key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }
}

/// Text and element styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Semantic tone
    pub tone: Option<Tone>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            tone: None,
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    /// Set the tone
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Set bold
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set dim
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
