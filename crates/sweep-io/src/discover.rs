//! Recursive file enumeration.
//!
//! Produces the flat set of regular files under a root. Selection policy
//! (which of those files get rewritten) belongs to the caller, so nothing is
//! filtered here beyond file-ness.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::IoError;

/// Enumerate every regular file under `root`, recursively.
///
/// Symlinks are not followed. Subtrees that cannot be read are skipped; only
/// an unusable root is an error. An empty tree yields `Ok(vec![])` - whether
/// that is acceptable is the caller's policy.
///
/// # Errors
/// Returns [`IoError::NotFound`] when `root` cannot be stat'd and
/// [`IoError::NotADirectory`] when it exists but is not a directory.
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let metadata =
        fs::metadata(root).map_err(|_| IoError::NotFound(root.to_string_lossy().to_string()))?;

    if !metadata.is_dir() {
        return Err(IoError::NotADirectory(root.to_string_lossy().to_string()));
    }

    let files = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_enumerate_recursive() {
        let dir = TempDir::new().expect("Create temp dir");
        File::create(dir.path().join("root.txt")).expect("Create root file");
        fs::create_dir(dir.path().join("sub")).expect("Create subdir");
        File::create(dir.path().join("sub").join("nested.txt")).expect("Create nested file");
        fs::create_dir(dir.path().join("sub").join("deep")).expect("Create deep dir");
        File::create(dir.path().join("sub").join("deep").join("leaf.md"))
            .expect("Create leaf file");

        let files = enumerate_files(dir.path()).expect("Enumerate");

        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|f| f.ends_with("root.txt")));
        assert!(files.iter().any(|f| f.ends_with("nested.txt")));
        assert!(files.iter().any(|f| f.ends_with("leaf.md")));
    }

    #[test]
    fn test_enumerate_empty_tree() {
        let dir = TempDir::new().expect("Create temp dir");
        let files = enumerate_files(dir.path()).expect("Enumerate");
        assert!(files.is_empty());
    }

    #[test]
    fn test_enumerate_missing_root() {
        let result = enumerate_files(Path::new("/nonexistent/tree"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_enumerate_root_is_file() {
        let dir = TempDir::new().expect("Create temp dir");
        let file = dir.path().join("plain.txt");
        File::create(&file).expect("Create file");

        let result = enumerate_files(&file);
        assert!(matches!(result, Err(IoError::NotADirectory(_))));
    }

    #[test]
    fn test_enumerate_skips_directories() {
        let dir = TempDir::new().expect("Create temp dir");
        fs::create_dir(dir.path().join("only_dirs")).expect("Create subdir");
        File::create(dir.path().join("only_dirs").join("a.txt")).expect("Create file");

        let files = enumerate_files(dir.path()).expect("Enumerate");
        assert_eq!(files.len(), 1);
        assert!(files[0].is_file());
    }
}
