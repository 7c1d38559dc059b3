//! Initial-state grid loader

use cellrom_spec::Grid;

use crate::error::{CompileError, Result};

/// Parse the initial-state matrix.
///
/// One row per line, whitespace-separated non-negative integers; blank lines
/// and trailing whitespace are ignored. `origin` is the file name used in
/// error messages.
///
/// Fails with [`CompileError::EmptyGrid`] when no readable row exists and
/// with [`CompileError::RaggedGrid`] when a row's column count differs from
/// row 0's.
pub fn parse_grid(source: &str, origin: &str) -> Result<Grid> {
    let mut cells: Vec<Vec<u64>> = Vec::new();
    // Floor of 1 so the width computation never sees an empty domain
    let mut max_value = 1u64;

    for (index, raw) in source.lines().enumerate() {
        let mut row = Vec::new();
        for token in raw.split_whitespace() {
            let value: u64 = token.parse().map_err(|_| CompileError::MalformedCell {
                origin: origin.to_string(),
                line: index + 1,
                token: token.to_string(),
            })?;
            if value > max_value {
                max_value = value;
            }
            row.push(value);
        }
        if !row.is_empty() {
            cells.push(row);
        }
    }

    if cells.is_empty() {
        return Err(CompileError::EmptyGrid {
            origin: origin.to_string(),
        });
    }

    let cols = cells[0].len();
    for (row, states) in cells.iter().enumerate() {
        if states.len() != cols {
            return Err(CompileError::RaggedGrid {
                origin: origin.to_string(),
                row,
                expected: cols,
                found: states.len(),
            });
        }
    }

    tracing::info!("detected automaton size: {}x{}", cols, cells.len());
    Ok(Grid::new(cells, max_value))
}
