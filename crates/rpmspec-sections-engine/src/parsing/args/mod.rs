//! # Section Header Arguments
//!
//! A declarative [`OptionGrammar`] lists, per section name, the option flags and
//! their arities. [`parse_section_args`] is the single scanner that applies it.

pub mod grammar;
pub mod parser;

pub use grammar::{Arity, OptionGrammar, OptionSpec, Positional, RPM_GRAMMAR, SectionGrammar};
pub use parser::{ArgsError, OptionValue, ParsedSectionArgs, UnknownFlags, parse_section_args};
