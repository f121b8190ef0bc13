use crate::scanner::FileEntry;
use ahash::AHashMap;
use std::path::{Path, PathBuf};

/// Case-insensitive extension filter for image files.
#[derive(Debug, Clone)]
pub struct ImageFilter {
    extensions: Vec<String>,
}

impl ImageFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn is_image(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|image_ext| *image_ext == ext)
            }
            None => false,
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(&crate::config::DEFAULT_IMAGE_EXTENSIONS[..])
    }
}

/// Check a path against the default image extension set.
pub fn is_image_file(path: &Path) -> bool {
    ImageFilter::default().is_image(path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub a: FileEntry,
    pub b: FileEntry,
}

#[derive(Debug, Clone, Default)]
pub struct MatchPlan {
    /// Non-image files from tree A, matched or not.
    pub considered: usize,
    pub pairs: Vec<MatchedPair>,
    /// Relative paths of considered A files with no counterpart in B.
    pub unmatched: Vec<PathBuf>,
}

/// Pair every non-image file of tree A with the file of tree B at the same
/// relative path. When several B files share a relative path the first one
/// in `files_b` wins.
pub fn resolve_matches(
    files_a: &[FileEntry],
    files_b: &[FileEntry],
    images: &ImageFilter,
) -> MatchPlan {
    let mut index: AHashMap<&Path, &FileEntry> = AHashMap::with_capacity(files_b.len());
    for file in files_b {
        index.entry(file.relative.as_path()).or_insert(file);
    }

    let mut plan = MatchPlan::default();
    for file_a in files_a {
        if images.is_image(&file_a.path) {
            continue;
        }
        plan.considered += 1;

        match index.get(file_a.relative.as_path()) {
            Some(file_b) => plan.pairs.push(MatchedPair {
                a: file_a.clone(),
                b: (*file_b).clone(),
            }),
            None => plan.unmatched.push(file_a.relative.clone()),
        }
    }
    plan
}
