//! Puzzle error types

use std::io;

use thiserror::Error;

/// A malformed puzzle specification
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("grid size {size} does not equal block size {block_rows}x{block_cols}")]
    SizeBlockMismatch {
        size: usize,
        block_rows: usize,
        block_cols: usize,
    },
    #[error("grid size must be at least 1")]
    SizeZero,
    #[error("grid size {0} exceeds the {} available tokens", super::token::MAX_ALPHABET)]
    SizeTooBig(usize),
    #[error("clue count {count} out of range 1..={cell_count}")]
    ClueCountOutOfRange { count: usize, cell_count: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum ParsePuzzleError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown token \"{token}\" at row {row}, column {col}")]
    UnknownToken { token: String, row: usize, col: usize },
    #[error("expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    WrongRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum BoardFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

/// Puzzle generation failure
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("puzzle generation timed out after {attempts} attempts")]
    Timeout { attempts: u64 },
}
