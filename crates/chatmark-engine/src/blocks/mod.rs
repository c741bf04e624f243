//! # Block Tree Building
//!
//! Turns a flat sequence of styled runs, each tagged with the containers it
//! sits in, into a nested tree of blocks.
//!
//! ## Phases
//!
//! 1. **Event production** (`events`): an `EventProducer` diffs each run's
//!    container path against the previous one and emits `Open`/`Close`/`Text`/
//!    `Divider` events
//! 2. **Assembly** (`builder`): a `BlockBuilder` replays the events against a
//!    stack of in-progress nodes and finalizes each node into a `Block` when it
//!    closes
//!
//! ## Modules
//!
//! - **`types`**: `Container`, `Block`, `ListKind`
//! - **`run`**: `Run`, the unit of input
//! - **`containers`**: `ContainerPath` prefix comparison
//! - **`events`**: `Event` and the `EventProducer`
//! - **`node`**: the transient nodes living on the assembler's stack
//! - **`builder`**: `BlockBuilder` and routing of finished blocks
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in quotes in list items, etc.)
//! - Every block in the output comes from exactly one node close
//! - Assembly never fails; malformed event orders degrade without losing text

pub mod builder;
pub mod containers;
pub mod events;
pub(crate) mod node;
pub mod run;
pub mod types;

pub use builder::{BlockBuilder, assemble};
pub use containers::ContainerPath;
pub use events::{Event, EventProducer, produce_events};
pub use run::Run;
pub use types::{Block, Container, ListKind};
