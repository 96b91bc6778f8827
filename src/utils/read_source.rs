use crate::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a persisted source file.
///
/// A missing file is `SourceUnavailable`; any other read failure is an `IoError`.
pub fn read_source(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceUnavailable {
            path: path.to_path_buf(),
        },
        _ => Error::IoError(e),
    })
}

/// Same as `read_source`, rejecting content that is not UTF-8 as `SourceCorrupt`.
pub fn read_source_to_string(path: &Path) -> Result<String, Error> {
    String::from_utf8(read_source(path)?).map_err(|e| Error::SourceCorrupt {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("missing.json")).unwrap_err();

        assert_eq!(err.kind(), "source_unavailable");
    }

    #[test]
    fn test_invalid_utf8_is_source_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        assert_eq!(read_source(&path).unwrap().len(), 4);
        assert_eq!(read_source_to_string(&path).unwrap_err().kind(), "source_corrupt");
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).unwrap_err();

        assert_eq!(err.kind(), "io_error");
    }
}
