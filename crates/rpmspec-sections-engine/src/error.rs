use std::path::PathBuf;

use crate::io::IoError;
use crate::parsing::{args::ArgsError, header::HeaderError};

/// Errors raised while interpreting a spec file's sections.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("{}{}: invalid section header `{text}`", path.display(), at_line(line))]
    InvalidSpec {
        path: PathBuf,
        line: Option<usize>,
        text: String,
        #[source]
        source: HeaderError,
    },

    #[error("{}{}: invalid arguments for {section}", path.display(), at_line(line))]
    InvalidArguments {
        path: PathBuf,
        section: String,
        line: Option<usize>,
        #[source]
        source: ArgsError,
    },

    #[error(transparent)]
    Io(#[from] IoError),
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(":{l}")).unwrap_or_default()
}
