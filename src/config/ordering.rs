//! Ordering policy for discovered paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How directory listings are ordered before they are flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrdering {
    /// Participants and recording folders sorted by name (default).
    #[default]
    Sorted,
    /// Whatever order the operating system lists entries in.
    Filesystem,
}

impl fmt::Display for PathOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrdering::Sorted => write!(f, "sorted"),
            PathOrdering::Filesystem => write!(f, "filesystem"),
        }
    }
}

impl FromStr for PathOrdering {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" => Ok(PathOrdering::Sorted),
            "filesystem" | "fs" => Ok(PathOrdering::Filesystem),
            _ => Err(format!("Unknown path ordering: {}", s)),
        }
    }
}
