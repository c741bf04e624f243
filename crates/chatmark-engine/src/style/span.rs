/// A byte range `[start, end)` into a [`StyledText`](super::StyledText) buffer.
///
/// Style runs store spans rather than copied text, so slicing the buffer with
/// any run's span reproduces exactly the characters that run styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Clips the span so it ends no later than `limit`.
    #[must_use]
    pub fn clip(self, limit: usize) -> Span {
        Span {
            start: self.start.min(limit),
            end: self.end.min(limit),
        }
    }
}
