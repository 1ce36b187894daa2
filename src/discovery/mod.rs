//! Recording discovery.
//!
//! Provides:
//! - Recording folder enumeration across participants
//! - Suffix filtering of recording folders
//! - CSV collection inside matched folders
//! - A stateless finder tying the steps together

pub mod collect;
pub mod filter;
pub mod finder;
pub mod recordings;

pub use collect::{collect_csv_files, CSV_PATTERN};
pub use filter::filter_by_suffix;
pub use finder::TaskPathFinder;
pub use recordings::find_recording_folders;
