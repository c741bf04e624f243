use serde::{Deserialize, Serialize};

/// Typeface family of a [`Font`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// The host platform's proportional UI font.
    #[default]
    System,
    /// The host platform's fixed-width font.
    Monospace,
    /// A font installed under the given family name.
    Named(String),
}

/// Stroke weight, ordered from lightest to heaviest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

impl FontWeight {
    /// Whether text at this weight reads as bold.
    #[must_use]
    pub fn is_bold(self) -> bool {
        self >= FontWeight::Semibold
    }
}

/// A resolved font description carried by styled text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    pub const DEFAULT_SIZE: f32 = 16.0;

    #[must_use]
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    #[must_use]
    pub fn monospaced(size: f32) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..Self::system(size)
        }
    }

    #[must_use]
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    #[must_use]
    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    #[must_use]
    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    #[must_use]
    pub fn is_fixed_width(&self) -> bool {
        matches!(self.family, FontFamily::Monospace)
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }

    /// The font a header of `level` is drawn with, in the family of `base`.
    ///
    /// Levels past 6 are treated as 6.
    #[must_use]
    pub fn header(base: &Font, level: u8) -> Self {
        let (size, weight) = match level {
            0 | 1 => (22.0, FontWeight::Bold),
            2 => (20.0, FontWeight::Semibold),
            3 => (18.0, FontWeight::Semibold),
            _ => (16.0, FontWeight::Semibold),
        };
        Self {
            family: base.family.clone(),
            size,
            weight,
            italic: false,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(Self::DEFAULT_SIZE)
    }
}
