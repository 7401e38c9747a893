use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, column {column}: '{value}' is not a number")]
    NonNumeric {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Measurement table is empty: missing header line")]
    MissingHeaderLine,

    #[error("Header row '{0}' not found in pathway table")]
    MissingHeaderMarker(String),

    #[error("Pathway '{pathway}' references protein '{protein}' with no measurement")]
    UnmatchedProtein { pathway: String, protein: String },
}

pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Create a new MalformedRow error
    pub fn malformed_row(line: usize, expected: usize, found: usize) -> Self {
        DataError::MalformedRow {
            line,
            expected,
            found,
        }
    }

    /// Create a new NonNumeric error
    pub fn non_numeric(line: usize, column: usize, value: impl Into<String>) -> Self {
        DataError::NonNumeric {
            line,
            column,
            value: value.into(),
        }
    }

    /// Create a new UnmatchedProtein error
    pub fn unmatched_protein(pathway: impl Into<String>, protein: impl Into<String>) -> Self {
        DataError::UnmatchedProtein {
            pathway: pathway.into(),
            protein: protein.into(),
        }
    }
}
