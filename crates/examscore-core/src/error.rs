//! Error types for count entry and answer-key import.
//!
//! `CountError` is recoverable: the session stays where it was and the
//! message is shown on the next render. `ImportError` is fatal for the
//! import path; format errors carry the 1-based line they were found on.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid question count entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The input is not a decimal integer.
    #[error("'{0}' is not a number; enter a number between 1 and 90")]
    NotANumber(String),

    /// The number is outside the accepted range.
    #[error("{0} is out of range; enter a number between 1 and 90")]
    OutOfRange(i64),
}

/// Errors raised while importing an answer-key file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file has no lines at all.
    #[error("the file is empty")]
    Empty,

    /// Line 1 does not hold a usable question count.
    #[error("line 1 must contain the number of questions: {0}")]
    InvalidCount(#[source] CountError),

    /// The file ends before every question has a line.
    #[error("missing answers at line {line}")]
    MissingAnswers { line: usize },

    /// An answer line is not exactly four characters long.
    #[error("line {line} must contain exactly 4 characters, found {found}")]
    WrongLength { line: usize, found: usize },

    /// An answer line holds a character outside `0 1 A a F f`.
    #[error("line {line} contains invalid character '{character}' (only 0, 1, A, a, F, f are allowed)")]
    InvalidCharacter { line: usize, character: char },

    /// An answer line marks zero or four correct options.
    #[error(
        "at least one and at most 3 answers can be correct; found {found} at line {line} (question {question})"
    )]
    KeyCount {
        line: usize,
        question: usize,
        found: usize,
    },

    /// The file could not be read.
    #[error("failed to read answer key {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// The 1-based line number the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ImportError::InvalidCount(_) => Some(1),
            ImportError::MissingAnswers { line }
            | ImportError::WrongLength { line, .. }
            | ImportError::InvalidCharacter { line, .. }
            | ImportError::KeyCount { line, .. } => Some(*line),
            ImportError::Empty | ImportError::Io { .. } => None,
        }
    }
}
