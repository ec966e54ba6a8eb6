//! # Snapshot Testing Support
//!
//! Utilities for testing the partitioner via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts section blocks to a stable, serializable `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for partitioner correctness (preamble first,
//!   header grammar, blocks reproduce the significant input lines)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
