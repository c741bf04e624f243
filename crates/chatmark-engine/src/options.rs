use crate::style::{Color, Font};

/// Presentation inputs shared by every block a build produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOptions {
    /// Font for body text; header and code fonts derive from it.
    pub base_font: Font,
    /// Colour applied to all paragraph and header text when set.
    pub override_color: Option<Color>,
}

impl BuildOptions {
    #[must_use]
    pub fn new(base_font: Font, override_color: Option<Color>) -> Self {
        Self {
            base_font,
            override_color,
        }
    }
}
