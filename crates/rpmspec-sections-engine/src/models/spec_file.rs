use std::path::{Path, PathBuf};

use crate::io::{IoError, read_spec_file};
use crate::parsing::partition;

use super::sections::SpecSections;

/// The raw lines of a spec file and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SpecFile {
    /// Reads and splits a spec file. Missing and unreadable files fail here,
    /// before any parsing happens.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let text = read_spec_file(path)?;
        Ok(Self::from_text(path, &text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Partitions the file into sections.
    pub fn sections(&self) -> SpecSections {
        SpecSections::new(self.path.clone(), partition(&self.lines))
    }
}
