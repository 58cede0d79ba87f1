//! Requirements manifest discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The only manifest name recognized next to a rendered file.
pub const MANIFEST_FILE_NAME: &str = "requirements.txt";

/// Outcome of looking for manifests next to the rendered files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestDiscovery {
    /// No rendered file has a manifest beside it.
    NotFound,
    /// Exactly one distinct manifest exists.
    Found(PathBuf),
    /// Several distinct manifests exist; installing them all may conflict.
    Ambiguous(Vec<PathBuf>),
}

impl ManifestDiscovery {
    fn from_candidates(candidates: BTreeSet<PathBuf>) -> Self {
        let mut paths: Vec<PathBuf> = candidates.into_iter().collect();
        match paths.len() {
            0 => Self::NotFound,
            1 => Self::Found(paths.remove(0)),
            _ => Self::Ambiguous(paths),
        }
    }
}

/// Path of the manifest that would apply to `input_file`.
///
/// The manifest lives in the same directory as the input. A bare file name
/// maps to `requirements.txt` in the current directory.
pub fn manifest_path_for(input_file: &Path) -> PathBuf {
    let dir: PathBuf = input_file
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    dir.join(MANIFEST_FILE_NAME)
}

/// Discovers manifests for a set of rendered files.
///
/// The existence check is pluggable so that decisions can be tested without
/// touching the filesystem.
pub struct ManifestDetector<F = fn(&Path) -> bool> {
    exists: F,
}

impl ManifestDetector {
    /// Create a detector that checks the real filesystem.
    pub fn new() -> Self {
        Self {
            exists: Path::is_file,
        }
    }
}

impl Default for ManifestDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ManifestDetector<F>
where
    F: Fn(&Path) -> bool,
{
    /// Create a detector with a custom existence check.
    pub fn with_exists(exists: F) -> Self {
        Self { exists }
    }

    /// Distinct candidate paths for the given inputs, before the existence check.
    pub fn candidates(&self, input_files: &[PathBuf]) -> BTreeSet<PathBuf> {
        input_files.iter().map(|f| manifest_path_for(f)).collect()
    }

    /// Find the manifests that exist beside the given inputs.
    pub fn detect(&self, input_files: &[PathBuf]) -> ManifestDiscovery {
        let existing: BTreeSet<PathBuf> = self
            .candidates(input_files)
            .into_iter()
            .filter(|candidate| {
                let found = (self.exists)(candidate.as_path());
                tracing::debug!(candidate = %candidate.display(), found, "Checked manifest");
                found
            })
            .collect();

        ManifestDiscovery::from_candidates(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(|s| PathBuf::from(*s)).collect()
    }

    #[test]
    fn manifest_path_is_sibling() {
        assert_eq!(
            manifest_path_for(Path::new("docs/index.qmd")),
            PathBuf::from("docs/requirements.txt")
        );
    }

    #[test]
    fn manifest_path_for_bare_file_is_current_dir() {
        assert_eq!(
            manifest_path_for(Path::new("index.qmd")),
            PathBuf::from("requirements.txt")
        );
    }

    #[test]
    fn manifest_path_normalizes_redundant_separators() {
        assert_eq!(
            manifest_path_for(Path::new("docs//./index.qmd")),
            PathBuf::from("docs/requirements.txt")
        );
    }

    #[test]
    fn same_directory_inputs_collapse_to_one_candidate() {
        let detector = ManifestDetector::with_exists(|_: &Path| true);
        let candidates =
            detector.candidates(&paths(&["a/doc.qmd", "a/other.qmd", "a/third.ipynb"]));
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(Path::new("a/requirements.txt")));
    }

    #[test]
    fn nothing_found_when_no_manifest_exists() {
        let detector = ManifestDetector::with_exists(|_: &Path| false);
        let result = detector.detect(&paths(&["a/doc.qmd", "b/doc.qmd"]));
        assert_eq!(result, ManifestDiscovery::NotFound);
    }

    #[test]
    fn single_manifest_found() {
        let detector =
            ManifestDetector::with_exists(|p: &Path| p == Path::new("a/requirements.txt"));
        let result = detector.detect(&paths(&["a/doc.qmd", "b/doc.qmd"]));
        assert_eq!(
            result,
            ManifestDiscovery::Found(PathBuf::from("a/requirements.txt"))
        );
    }

    #[test]
    fn duplicate_inputs_yield_single_manifest() {
        let detector = ManifestDetector::with_exists(|_: &Path| true);
        let result = detector.detect(&paths(&["a/doc.qmd", "a/other.qmd"]));
        assert_eq!(
            result,
            ManifestDiscovery::Found(PathBuf::from("a/requirements.txt"))
        );
    }

    #[test]
    fn multiple_manifests_are_ambiguous_and_sorted() {
        let detector = ManifestDetector::with_exists(|_: &Path| true);
        let result = detector.detect(&paths(&["b/doc.qmd", "a/doc.qmd"]));
        assert_eq!(
            result,
            ManifestDiscovery::Ambiguous(paths(&["a/requirements.txt", "b/requirements.txt"]))
        );
    }

    #[test]
    fn empty_input_list_finds_nothing() {
        let detector = ManifestDetector::with_exists(|_: &Path| true);
        assert_eq!(detector.detect(&[]), ManifestDiscovery::NotFound);
    }

    #[test]
    fn filesystem_detector_finds_real_manifest() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join(MANIFEST_FILE_NAME), "requests\n").unwrap();

        let result = ManifestDetector::new().detect(&[a.join("doc.qmd"), b.join("doc.qmd")]);
        assert_eq!(result, ManifestDiscovery::Found(a.join(MANIFEST_FILE_NAME)));
    }

    #[test]
    fn filesystem_detector_ignores_directory_named_like_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(MANIFEST_FILE_NAME)).unwrap();

        let result = ManifestDetector::new().detect(&[temp.path().join("doc.qmd")]);
        assert_eq!(result, ManifestDiscovery::NotFound);
    }
}
