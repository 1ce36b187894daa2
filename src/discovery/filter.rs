//! Suffix filtering of recording folders.

use std::path::PathBuf;

/// Keep the folders whose final path component ends with `suffix`.
///
/// Matching is exact and case-sensitive.
pub fn filter_by_suffix(folders: Vec<PathBuf>, suffix: &str) -> Vec<PathBuf> {
    folders
        .into_iter()
        .filter(|folder| {
            folder
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
        })
        .collect()
}
