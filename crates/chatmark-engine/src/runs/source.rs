use std::borrow::Cow;

use crate::{blocks::Run, style::Font};

use super::markdown::parse_runs;

/// Anything the builder can turn into a run sequence: raw markdown, or runs
/// produced by another parser.
pub trait RunSource {
    fn to_runs(&self, base_font: &Font) -> Cow<'_, [Run]>;
}

impl RunSource for str {
    fn to_runs(&self, base_font: &Font) -> Cow<'_, [Run]> {
        Cow::Owned(parse_runs(self, base_font))
    }
}

impl RunSource for String {
    fn to_runs(&self, base_font: &Font) -> Cow<'_, [Run]> {
        self.as_str().to_runs(base_font)
    }
}

impl RunSource for [Run] {
    fn to_runs(&self, _base_font: &Font) -> Cow<'_, [Run]> {
        Cow::Borrowed(self)
    }
}

impl RunSource for Vec<Run> {
    fn to_runs(&self, _base_font: &Font) -> Cow<'_, [Run]> {
        Cow::Borrowed(self)
    }
}
