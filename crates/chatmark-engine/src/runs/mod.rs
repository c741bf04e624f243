//! # Run Sources
//!
//! Producers of the container-annotated run sequence the block builder
//! consumes.
//!
//! - **`markdown`**: `parse_runs` walks pulldown-cmark events and emits one run
//!   per stretch of uniformly styled text, tagged with its container path
//! - **`source`**: the `RunSource` trait, letting the entry point accept either
//!   markdown or pre-built runs

pub mod markdown;
pub mod source;

pub use markdown::parse_runs;
pub use source::RunSource;
