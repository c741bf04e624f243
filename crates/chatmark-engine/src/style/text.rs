use super::{color::Color, font::Font, span::Span};

/// Presentation attributes of one stretch of text.
///
/// Bold, italic and inline code are carried by `font`; there are no separate
/// flags for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    /// Explicit font. `None` means "draw with the base font".
    pub font: Option<Font>,
    pub color: Option<Color>,
    /// Link destination.
    pub link: Option<String>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    #[must_use]
    pub fn with_font(font: Font) -> Self {
        Self {
            font: Some(font),
            ..Self::default()
        }
    }

    /// Whether this style differs visibly from running body text.
    ///
    /// Colour alone does not count.
    #[must_use]
    pub fn is_inline_styled(&self) -> bool {
        self.font.is_some() || self.link.is_some() || self.underline || self.strikethrough
    }
}

/// A contiguous stretch of a [`StyledText`] sharing one [`TextStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub span: Span,
    pub style: TextStyle,
}

/// An owned text buffer with a run list of style attributes.
///
/// # Invariants
///
/// - runs are contiguous and together cover the whole text
/// - no run is empty
/// - adjacent runs never carry equal styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    runs: Vec<StyleRun>,
}

impl StyledText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self::styled(text, TextStyle::default())
    }

    #[must_use]
    pub fn styled(text: &str, style: TextStyle) -> Self {
        let mut out = Self::new();
        out.push_str(text, style);
        out
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Iterates over `(text, style)` pairs in order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &TextStyle)> {
        self.runs
            .iter()
            .map(|run| (&self.text[run.span.start..run.span.end], &run.style))
    }

    /// True if any run carries inline styling.
    #[must_use]
    pub fn has_inline_styling(&self) -> bool {
        self.runs.iter().any(|run| run.style.is_inline_styled())
    }

    /// Appends `text` drawn with `style`, extending the last run when the
    /// style matches.
    pub fn push_str(&mut self, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        match self.runs.last_mut() {
            Some(last) if last.style == style => last.span.end = end,
            _ => self.runs.push(StyleRun {
                span: Span { start, end },
                style,
            }),
        }
    }

    /// Appends every run of `other`.
    pub fn append(&mut self, other: &StyledText) {
        for (text, style) in other.segments() {
            self.push_str(text, style.clone());
        }
    }

    /// Rewrites each run's style in place, then re-merges runs that became equal.
    pub fn map_styles(&mut self, mut f: impl FnMut(&mut TextStyle)) {
        for run in &mut self.runs {
            f(&mut run.style);
        }
        self.merge_runs();
    }

    /// Applies `font` across the whole buffer.
    pub fn set_font(&mut self, font: &Font) {
        self.map_styles(|style| style.font = Some(font.clone()));
    }

    /// Applies `color` across the whole buffer.
    pub fn set_color(&mut self, color: Color) {
        self.map_styles(|style| style.color = Some(color));
    }

    /// Removes trailing characters in `chars`, clipping or dropping the runs
    /// that covered them.
    pub fn trim_end_matches(&mut self, chars: &[char]) {
        let keep = self.text.trim_end_matches(chars).len();
        if keep == self.text.len() {
            return;
        }
        self.text.truncate(keep);
        self.runs.retain_mut(|run| {
            run.span = run.span.clip(keep);
            !run.span.is_empty()
        });
    }

    fn merge_runs(&mut self) {
        let mut merged: Vec<StyleRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.style == run.style => last.span.end = run.span.end,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
