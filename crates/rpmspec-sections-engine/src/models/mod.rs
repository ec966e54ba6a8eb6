pub mod preamble;
pub mod sections;
pub mod spec_file;

pub use preamble::*;
pub use sections::*;
pub use spec_file::*;
