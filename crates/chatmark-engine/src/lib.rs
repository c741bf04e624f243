//! Builds nested block trees for chat message rendering.
//!
//! Markdown (or runs from any parser that tags text with its container path)
//! goes in; an ordered sequence of [`Block`]s comes out: text, dividers, lists,
//! block quotes and code blocks, nested to any depth.

pub mod blocks;
pub mod options;
pub mod runs;
pub mod snapshot;
pub mod style;

// Re-export key types for easier usage
pub use blocks::{Block, Container, Event, ListKind, Run};
pub use options::BuildOptions;
pub use runs::{RunSource, parse_runs};
pub use style::{Color, Font, FontFamily, FontWeight, StyledText, TextStyle};

/// Builds the block tree for `source`.
///
/// Never fails: input that yields no runs yields no blocks, and malformed
/// container metadata degrades without dropping text.
#[must_use]
pub fn build_blocks<S: RunSource + ?Sized>(
    source: &S,
    base_font: &Font,
    override_color: Option<Color>,
) -> Vec<Block> {
    build_blocks_with(source, &BuildOptions::new(base_font.clone(), override_color))
}

/// Like [`build_blocks`], taking the presentation inputs as [`BuildOptions`].
#[must_use]
pub fn build_blocks_with<S: RunSource + ?Sized>(source: &S, options: &BuildOptions) -> Vec<Block> {
    let runs = source.to_runs(&options.base_font);
    let events = blocks::produce_events(&runs);
    blocks::assemble(events, options)
}
