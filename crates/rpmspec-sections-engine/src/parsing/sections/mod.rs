//! # Section Partitioning
//!
//! Two-phase splitting of a spec file into section blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each significant line is classified
//!    on its own as a section header, a conditional macro line or an ordinary line
//!
//! 2. **Block Construction** (`builder`): a `SectionBuilder` keeps the open block
//!    and emits a `SectionBlock` every time a header starts the next one
//!
//! ## Modules
//!
//! - **`kinds`**: `SectionKind`, the fixed set of section names that open blocks
//! - **`classify`**: `SpecLineClassifier` produces a `LineClass` for each line
//! - **`types`**: `SectionBlock` and `BodyLine`
//! - **`builder`**: `SectionBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - The first block is always the implicit `%package` preamble
//! - Conditional macros are never evaluated; they stay in the body they appear in
//! - Header and body lines of all blocks, in order, are exactly the significant
//!   lines of the input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::SectionBuilder;
pub use classify::{LineClass, LineKind, SpecLineClassifier};
pub use kinds::SectionKind;
pub use types::{BodyLine, SectionBlock};
