//! Filesystem helpers for writing selected embeddings.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Create the parent directories of `path` if they do not exist.
///
/// Returns `true` when directories were created. Bare file names and
/// paths whose parent directory already exists are left untouched.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<bool> {
    let dir = match path.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(false),
    };

    if dir.exists() {
        return Ok(false);
    }

    info!("Directory {} doesn't exist, creating ...", dir.display());
    fs::create_dir_all(dir).map_err(|e| {
        Error::io_error(format!("Cannot create directory {}", dir.display()), e)
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::ensure_parent_dir;

    #[test]
    fn creates_nested_directories() {
        let root = tempdir().unwrap();
        let out = root.path().join("nested").join("dir").join("out.txt");

        assert!(ensure_parent_dir(&out).unwrap());
        assert!(root.path().join("nested/dir").is_dir());
        assert!(!out.exists());

        File::create(&out).unwrap();
        assert!(out.is_file());
    }

    #[test]
    fn existing_directory_is_kept() {
        let root = tempdir().unwrap();
        let out = root.path().join("out.txt");
        File::create(&out).unwrap();

        assert!(!ensure_parent_dir(&out).unwrap());
        assert!(!ensure_parent_dir(&out).unwrap());
        assert!(out.is_file());
    }

    #[test]
    fn bare_file_name() {
        assert!(!ensure_parent_dir("out.txt").unwrap());
    }

    #[test]
    fn parent_is_a_file() {
        let root = tempdir().unwrap();
        let blocker = root.path().join("blocker");
        File::create(&blocker).unwrap();

        assert!(ensure_parent_dir(blocker.join("sub").join("out.txt")).is_err());
    }
}
