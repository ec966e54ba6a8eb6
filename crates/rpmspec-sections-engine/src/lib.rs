pub mod error;
pub mod io;
pub mod macros;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::SpecError;
pub use io::*;
pub use macros::MacroTable;
pub use models::{preamble::*, sections::*, spec_file::*};
pub use parsing::{
    args::{OptionGrammar, OptionValue, ParsedSectionArgs, UnknownFlags},
    partition, partition_str,
    sections::{SectionBlock, SectionKind},
};
