//! Initial-state grid representation.

/// Rectangular matrix of cell states loaded from the initial-state file.
///
/// Invariants (enforced by the grid loader): `rows >= 1` and every row of
/// `cells` has exactly `cols` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<u64>>,
    max_value: u64,
}

impl Grid {
    /// Build a grid from validated rows.
    ///
    /// Callers must have checked rectangularity already; this is the loader's
    /// job, not the type's.
    pub fn new(cells: Vec<Vec<u64>>, max_value: u64) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        Grid {
            rows,
            cols,
            cells,
            max_value,
        }
    }

    /// Number of rows (vertical size of the automaton)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (horizontal size of the automaton)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell states of one row
    pub fn row(&self, index: usize) -> &[u64] {
        &self.cells[index]
    }

    /// Largest cell state observed, floored at 1 so that width computation
    /// always has a non-degenerate domain
    pub fn max_value(&self) -> u64 {
        self.max_value
    }
}
