use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Spec file not found: {0}")]
    NotFound(PathBuf),
    #[error("Not an ordinary file: {0}")]
    NotAnOrdinaryFile(PathBuf),
    #[error("Couldn't read spec file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a spec file and return its content
pub fn read_spec_file(path: &Path) -> Result<String, IoError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(IoError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(IoError::NotAnOrdinaryFile(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::SpecFixture;

    #[test]
    fn test_read_spec_file_success() {
        let spec = SpecFixture::write("foo.spec", "Name: foo\n%build\nmake\n");

        let content = read_spec_file(spec.path()).unwrap();
        assert_eq!(content, "Name: foo\n%build\nmake\n");
    }

    #[test]
    fn test_read_spec_file_not_found() {
        let spec = SpecFixture::write("foo.spec", "");
        let result = read_spec_file(&spec.dir().join("missing.spec"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_directory_is_not_ordinary_file() {
        let spec = SpecFixture::write("foo.spec", "");
        let result = read_spec_file(spec.dir());
        assert!(matches!(result, Err(IoError::NotAnOrdinaryFile(_))));
        assert!(result.unwrap_err().to_string().contains("Not an ordinary file"));
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let spec = SpecFixture::write("binary.spec", b"\xff\xfe\x00");

        let result = read_spec_file(spec.path());
        assert!(matches!(result, Err(IoError::Read { .. })));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Couldn't read spec file")
        );
    }
}
