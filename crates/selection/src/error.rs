//! Error types produced by the selection crate.
//!
//! | Error | When |
//! |-------|------|
//! | [`NotApplicable`](SelectionError::NotApplicable) | Wrong count, wrong extension, or a folder in the selection |
//! | [`SecondFileUnresolved`](SelectionError::SecondFileUnresolved) | Chooser cancelled, or the pick is unusable |
//! | [`FirstFileInvalidated`](SelectionError::FirstFileInvalidated) | The first file vanished while the chooser was open |
//!
//! The `Display` strings of the last two are what a user sees, so they stay
//! short and capitalised like dialog text.
use std::fmt;

use thiserror::Error;

/// Why the file returned by the chooser cannot be diffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondFileProblem {
    /// The user closed the chooser without picking anything.
    Cancelled,
    /// The picked file does not exist.
    Missing,
    /// The picked file exists but cannot be opened for reading.
    Unreadable,
    /// The picked file has no content.
    Empty,
    /// A folder was picked.
    Directory,
    /// The picked file does not carry the JSON extension.
    NotJson,
}

impl fmt::Display for SecondFileProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SecondFileProblem::Cancelled => "selection cancelled",
            SecondFileProblem::Missing => "file missing",
            SecondFileProblem::Unreadable => "file cannot be read",
            SecondFileProblem::Empty => "file is empty",
            SecondFileProblem::Directory => "directory selected",
            SecondFileProblem::NotJson => "not a JSON file",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while resolving the two sides of a diff.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    /// The selection should never have reached the action.
    #[error("selection of {count} file(s) is not applicable")]
    NotApplicable { count: usize },

    /// No usable second file came back from the chooser.
    #[error("Problem with second JSON file")]
    SecondFileUnresolved(SecondFileProblem),

    /// The first file went away while the chooser was open.
    #[error("Problem with first JSON file")]
    FirstFileInvalidated,
}

impl SelectionError {
    /// Detail for logs; the `Display` text is meant for users.
    pub fn detail(&self) -> String {
        match self {
            SelectionError::SecondFileUnresolved(problem) => format!("second file: {problem}"),
            other => other.to_string(),
        }
    }
}
