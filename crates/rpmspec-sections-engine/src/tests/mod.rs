use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::models::SpecFile;

/// A spec file written into its own temporary directory.
pub struct SpecFixture {
    dir: TempDir,
    path: PathBuf,
}

impl SpecFixture {
    /// Writes `content` verbatim, so line endings and bytes reach the reader unchanged.
    pub fn write(name: &str, content: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        Self { dir, path }
    }

    /// The directory holding the spec, which is not itself a readable spec.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> SpecFile {
        SpecFile::load(&self.path).unwrap()
    }
}
