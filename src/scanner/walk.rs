use crate::error::Error;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// A regular, non-hidden file found under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// `path` with the root stripped; the identity key for cross-tree matching.
    pub relative: PathBuf,
}

pub fn compile_ignore_patterns(ignore_globs: &[String]) -> Vec<Pattern> {
    ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

/// Recursively list every regular file under `root`, sorted by path.
///
/// Files whose name starts with `.` are skipped; directories are descended
/// regardless of their name. Ignore patterns are matched against the path
/// relative to `root`. Symlinks are followed. Any listing failure aborts the
/// walk with `Error::PathAccess`.
pub fn list_files(root: &Path, ignore_patterns: &[Pattern]) -> Result<Vec<FileEntry>, Error> {
    let metadata = fs::metadata(root).map_err(|err| Error::path_access(root, err))?;
    if !metadata.is_dir() {
        return Err(Error::path_access(
            root,
            io::Error::new(io::ErrorKind::Other, "not a directory"),
        ));
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match entry.path().strip_prefix(root) {
            Ok(relative) if entry.depth() > 0 => !ignore_patterns
                .iter()
                .any(|pattern| pattern.matches_path(relative)),
            _ => true,
        });

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));
            Error::path_access(path, source)
        })?;

        if !entry.file_type().is_file() || is_hidden(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };
        files.push(FileEntry { path, relative });
    }

    debug!("{} files under {}", files.len(), root.display());
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
