//! Error types for dictionary and board construction.
//!
//! # Error Codes
//!
//! - E001: `EmptyWord`
//! - E002: `InvalidWordChar`
//! - E003: `EmptyBoard`
//! - E004: `RaggedBoard`
//! - E005: `BoardTooLarge`
//! - E006: `InvalidCell`
//! - E007: `InvalidInput`
//! - E008: `Io`
//! - E009: `Json`
//! - E010: `Serialization`
//!
//! Search itself never fails. All of these are reported before a search starts.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("Cannot insert an empty word")]
    EmptyWord,

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidWordChar { word: String, invalid_char: char },

    #[error("Board has no cells")]
    EmptyBoard,

    #[error("Board row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Board has {cells} cells, at most {max} are supported")]
    BoardTooLarge { cells: usize, max: usize },

    #[error("Invalid cell \"{value}\" at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("Invalid input: {str}")]
    InvalidInput { str: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dictionary cache error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl BoggleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoggleError::EmptyWord => "E001",
            BoggleError::InvalidWordChar { .. } => "E002",
            BoggleError::EmptyBoard => "E003",
            BoggleError::RaggedBoard { .. } => "E004",
            BoggleError::BoardTooLarge { .. } => "E005",
            BoggleError::InvalidCell { .. } => "E006",
            BoggleError::InvalidInput { .. } => "E007",
            BoggleError::Io(_) => "E008",
            BoggleError::Json(_) => "E009",
            BoggleError::Serialization(_) => "E010",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoggleError::InvalidWordChar { .. } => {
                Some("Lowercase the word list and drop lines with non-letters before inserting")
            }
            BoggleError::EmptyBoard => Some("Example: tlbi/edes/pang/pths"),
            BoggleError::RaggedBoard { .. } => Some("Every row must have the same number of cells"),
            BoggleError::InvalidCell { .. } => Some("Each cell must be a single letter a-z"),
            BoggleError::Serialization(_) => {
                Some("Delete the cache file so it is rebuilt from the word list")
            }
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let base_msg = self.to_string();
        let code = self.code();
        if let Some(help_text) = self.help() {
            format!("{base_msg} ({code})\n{help_text}")
        } else {
            format!("{base_msg} ({code})")
        }
    }
}

impl From<BoggleError> for io::Error {
    fn from(e: BoggleError) -> Self {
        match e {
            BoggleError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
