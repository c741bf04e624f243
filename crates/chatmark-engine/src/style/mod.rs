//! # Styled Text
//!
//! The text payload carried by runs, events and finished blocks.
//!
//! - **`span`**: `Span` byte ranges into a text buffer
//! - **`font`** / **`color`**: resolved presentation attributes
//! - **`text`**: `StyledText`, an owned buffer plus a run list of `TextStyle`s
//! - **`normalize`**: the size/colour normalisation applied to finished paragraphs

pub mod color;
pub mod font;
pub mod normalize;
pub mod span;
pub mod text;

pub use color::{Color, ColorParseError};
pub use font::{Font, FontFamily, FontWeight};
pub use normalize::normalize;
pub use span::Span;
pub use text::{StyleRun, StyledText, TextStyle};
