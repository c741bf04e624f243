use crate::style::StyledText;

use super::{containers::ContainerPath, types::Container};

/// A span of styled text together with its structural container path.
///
/// `containers` runs from outermost to innermost. An empty list means the run
/// is a plain top-level paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: StyledText,
    pub containers: Vec<Container>,
}

impl Run {
    #[must_use]
    pub fn new(text: impl Into<StyledText>, containers: Vec<Container>) -> Self {
        Self {
            text: text.into(),
            containers,
        }
    }

    /// The container path used when diffing against neighbouring runs.
    #[must_use]
    pub fn container_path(&self) -> ContainerPath {
        if self.containers.is_empty() {
            ContainerPath(vec![Container::Paragraph])
        } else {
            ContainerPath(self.containers.clone())
        }
    }

    /// Whether the run carries bold, italic, code, link, underline or an
    /// explicit font.
    #[must_use]
    pub fn has_inline_styling(&self) -> bool {
        self.text.has_inline_styling()
    }
}
