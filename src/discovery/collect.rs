//! CSV collection inside recording folders.

use std::fs;
use std::path::PathBuf;

use glob::{MatchOptions, Pattern};
use tracing::trace;

use crate::error::Result;

/// File pattern matched directly inside each recording folder.
pub const CSV_PATTERN: &str = "*.csv";

/// Shell-style matching: case-sensitive, `*` does not match a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Collect `*.csv` entries directly inside each folder, in folder order.
///
/// Sub-folders are not descended into. Within a folder, entries are sorted by
/// name. Entry names that are not valid UTF-8 never match; the folder path
/// itself may be any OS string.
pub fn collect_csv_files(folders: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(CSV_PATTERN)?;
    let mut csv_paths = Vec::new();

    for folder in folders {
        let mut matched = Vec::new();
        for entry in fs::read_dir(folder)? {
            let entry = entry?;
            let name = entry.file_name();
            if name
                .to_str()
                .is_some_and(|name| pattern.matches_with(name, MATCH_OPTIONS))
            {
                matched.push(entry.path());
            }
        }
        matched.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in &matched {
            trace!(path = %path.display(), "collected csv");
        }
        csv_paths.extend(matched);
    }

    Ok(csv_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DataTree;

    #[test]
    fn test_collects_csv_only() {
        let tree = DataTree::new();
        let folder = tree.recording("P1", "P1-water_task");
        tree.csv("P1", "P1-water_task", "b.csv");
        tree.csv("P1", "P1-water_task", "a.csv");
        tree.csv("P1", "P1-water_task", "notes.txt");

        let paths = collect_csv_files(&[folder.clone()]).unwrap();
        assert_eq!(paths, vec![folder.join("a.csv"), folder.join("b.csv")]);
    }

    #[test]
    fn test_does_not_recurse() {
        let tree = DataTree::new();
        let folder = tree.recording("P1", "P1-water_task");
        tree.csv("P1", "P1-water_task", "top.csv");
        tree.file("P1/csv/Recordings_Signal_Data/P1-water_task/nested/deep.csv");

        let paths = collect_csv_files(&[folder.clone()]).unwrap();
        assert_eq!(paths, vec![folder.join("top.csv")]);
    }

    #[test]
    fn test_hidden_and_uppercase_extension_are_skipped() {
        let tree = DataTree::new();
        let folder = tree.recording("P1", "P1-step_count");
        tree.csv("P1", "P1-step_count", ".partial.csv");
        tree.csv("P1", "P1-step_count", "UPPER.CSV");
        tree.csv("P1", "P1-step_count", "ok.csv");

        let paths = collect_csv_files(&[folder.clone()]).unwrap();
        assert_eq!(paths, vec![folder.join("ok.csv")]);
    }

    #[test]
    fn test_folder_order_is_preserved() {
        let tree = DataTree::new();
        let second = tree.recording("P2", "P2-water_task");
        let first = tree.recording("P1", "P1-water_task");
        tree.csv("P2", "P2-water_task", "x.csv");
        tree.csv("P1", "P1-water_task", "y.csv");

        let paths = collect_csv_files(&[second.clone(), first.clone()]).unwrap();
        assert_eq!(paths, vec![second.join("x.csv"), first.join("y.csv")]);
    }

    #[test]
    fn test_folder_name_with_glob_metacharacters() {
        let tree = DataTree::new();
        let folder = tree.recording("P[1]", "P[1]-water_task");
        tree.csv("P[1]", "P[1]-water_task", "a.csv");

        let paths = collect_csv_files(&[folder.clone()]).unwrap();
        assert_eq!(paths, vec![folder.join("a.csv")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_folder_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tree = DataTree::new();
        let participant = OsStr::from_bytes(b"P\xff");
        let folder =
            crate::fs::signal_data_dir(&tree.root().join(participant)).join("X-water_task");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("b.csv"), "").unwrap();
        fs::write(folder.join(OsStr::from_bytes(b"\xff.csv")), "").unwrap();

        let paths = collect_csv_files(&[folder.clone()]).unwrap();
        assert_eq!(paths, vec![folder.join("b.csv")]);
    }

    #[test]
    fn test_no_folders() {
        assert!(collect_csv_files(&[]).unwrap().is_empty());
    }
}
