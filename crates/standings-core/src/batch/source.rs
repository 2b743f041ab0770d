use std::fs;

use crate::error::Result;

/// Provides raw file contents by name.
///
/// Sources are shared across reader threads, one read per file.
pub trait FileSource: Send + Sync {
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// Reads files from the local filesystem; names are paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSource;

impl FileSource for DiskSource {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round1.csv");
        fs::write(&path, "place,username\n1,Alice\n").unwrap();

        let bytes = DiskSource.read(path.to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"place,username\n1,Alice\n");
    }

    #[test]
    fn test_disk_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = DiskSource.read(path.to_str().unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }
}
