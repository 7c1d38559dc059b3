//! Compiler errors

use thiserror::Error;

/// Exit code reported for malformed initial-state input
pub const EXIT_GRID_ERROR: u8 = 1;

/// Exit code reported for malformed transition-table input
pub const EXIT_TABLE_ERROR: u8 = 2;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("initial-state file {origin} contains 0 readable rows")]
    EmptyGrid { origin: String },

    #[error(
        "initial-state file {origin} contains {expected} readable columns on row 0 \
         but {found} readable columns on row {row}"
    )]
    RaggedGrid {
        origin: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("initial-state file {origin}, line {line}: invalid cell state '{token}'")]
    MalformedCell {
        origin: String,
        line: usize,
        token: String,
    },

    #[error(
        "transition table {origin} detected as {expected}-connected, \
         but line {line} contains {found} inputs"
    )]
    ArityMismatch {
        origin: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("transition table {origin}, line {line}: {message}")]
    MalformedRule {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// Process exit code for this failure.
    ///
    /// Grid-side problems (including unreadable inputs) and table-side
    /// problems get distinct non-zero codes so scripts can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            CompileError::EmptyGrid { .. }
            | CompileError::RaggedGrid { .. }
            | CompileError::MalformedCell { .. }
            | CompileError::Io(_) => EXIT_GRID_ERROR,
            CompileError::ArityMismatch { .. } | CompileError::MalformedRule { .. } => {
                EXIT_TABLE_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
