use crate::error::Error;
use crate::similarity::text_similarity;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRecord {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoding {
    /// Invalid UTF-8 sequences become U+FFFD.
    #[default]
    Lossy,
    /// Invalid UTF-8 is an error.
    Strict,
}

pub fn read_text(path: &Path, decoding: TextDecoding) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|err| Error::io(path, err))?;
    match decoding {
        TextDecoding::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        TextDecoding::Strict => String::from_utf8(bytes)
            .map_err(|err| Error::io(path, io::Error::new(io::ErrorKind::InvalidData, err))),
    }
}

/// Read both files and score their contents.
pub fn compare_files(
    path_a: &Path,
    path_b: &Path,
    decoding: TextDecoding,
) -> Result<SimilarityRecord, Error> {
    let content_a = read_text(path_a, decoding)?;
    let content_b = read_text(path_b, decoding)?;
    let similarity = text_similarity(&content_a, &content_b);
    trace!(
        "{} <-> {}: {:.4}",
        path_a.display(),
        path_b.display(),
        similarity
    );

    Ok(SimilarityRecord {
        path_a: path_a.to_path_buf(),
        path_b: path_b.to_path_buf(),
        similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_compare_identical_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "hello world").unwrap();
        fs::write(&b, "hello world").unwrap();

        let record = compare_files(&a, &b, TextDecoding::Lossy).unwrap();
        assert_eq!(record.path_a, a);
        assert_eq!(record.path_b, b);
        assert!((record.similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_empty_files_are_identical() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let record = compare_files(&a, &b, TextDecoding::Lossy).unwrap();
        assert_eq!(record.similarity, 1.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "x").unwrap();
        let missing = dir.path().join("missing.txt");

        match compare_files(&a, &missing, TextDecoding::Lossy) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_lossy_vs_strict() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.bin");
        fs::write(&a, [b'o', b'k', b' ', 0xff, 0xfe]).unwrap();

        let text = read_text(&a, TextDecoding::Lossy).unwrap();
        assert!(text.starts_with("ok "));
        assert!(matches!(
            read_text(&a, TextDecoding::Strict),
            Err(Error::Io { .. })
        ));
    }
}
