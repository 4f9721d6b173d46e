//! Error types shared by the assembler, the evolutionary search and the mutation simulator.

use thiserror::Error;

/// Every failure the library reports. None of these are fatal; they are returned to the caller
/// before (or instead of) running a computation.
#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("Invalid symbol '{symbol}' at position {position}: only A, T, C and G are allowed")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Empty sequence")]
    EmptySequence,

    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),

    #[error("Fragment already chosen: {0}")]
    FragmentAlreadyChosen(String),

    #[error("Duplicate fragment: {0}")]
    DuplicateFragment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenomeError {
    /// Whether the error is an input validation failure, as opposed to an environment problem.
    pub fn is_validation(&self) -> bool {
        !matches!(self, GenomeError::Io(_) | GenomeError::Config(_))
    }
}

/// Result type alias for library operations.
pub type GenomeResult<T> = Result<T, GenomeError>;
