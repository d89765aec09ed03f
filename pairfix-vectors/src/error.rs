//! Error types for vector reading and slicing.

use std::fmt;
use std::path::PathBuf;

/// Which of the two CSV columns an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Column 0, the concatenated operation input.
    Input,
    /// Column 1, the expected operation output.
    Expected,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Input => f.write_str("input"),
            Column::Expected => f.write_str("expected"),
        }
    }
}

/// Errors produced while reading vector CSV files and slicing their rows.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing {column} column")]
    MissingColumn { row: usize, column: Column },

    #[error("row {row}: {column} column is {len} hex characters, need {need}")]
    Truncated {
        row: usize,
        column: Column,
        len: usize,
        need: usize,
    },
}
