//! Dirscribe - writes an indented listing of a directory tree to a text file

pub mod report;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use report::{DEFAULT_OUTPUT_NAME, generate_report, write_report};
pub use walk::{DirVisit, walk};
