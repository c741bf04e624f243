//! # Snapshot Testing Support
//!
//! Utilities for testing the builder via snapshot assertions and invariant checks.
//!
//! - **`outline`**: renders a block tree as stable indented text for `insta`
//!   snapshots
//! - **`invariants`**: checks that produced event streams are balanced and well
//!   nested

pub mod invariants;
pub mod outline;

pub use invariants::check_balanced;
pub use outline::outline;
