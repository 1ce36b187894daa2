//! Directory listing helpers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PathOrdering;
use crate::error::Result;

/// List the immediate sub-directories of `dir`.
///
/// Files are skipped. Symlinks count if they resolve to a directory.
/// Any listing error, including a missing `dir`, is returned unchanged.
pub fn list_subdirectories(dir: &Path, ordering: PathOrdering) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }

    if ordering == PathOrdering::Sorted {
        subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(subdirs)
}
