//! Layout planner
//!
//! Pure combination step: no parsing, no I/O, just the final geometry record.

use cellrom_spec::{resolve_width, Geometry, Grid, RuleTable};

/// Derive the global geometry constants from the two validated inputs.
///
/// The cell state width covers the larger of the grid's and the table's
/// maximum observed value; `max_m_blocks` is passed through unchanged.
pub fn plan_layout(grid: &Grid, table: &RuleTable, max_m_blocks: usize) -> Geometry {
    let state_width = resolve_width(grid.max_value().max(table.max_value()));
    tracing::debug!("cell state width: {state_width} bits");

    Geometry {
        rows: grid.rows(),
        cols: grid.cols(),
        connection_num: table.arity().inputs(),
        state_width,
        ways: table.ways(),
        address_width: table.address_width(),
        valid_addresses: table.valid_addresses(),
        max_m_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile_rules, parse_grid};

    #[test]
    fn test_state_width_covers_both_inputs() {
        let grid = parse_grid("0 3\n1 0\n", "init.cas").unwrap();
        let table = compile_rules("0 1 0 1 0 : 5\n", "rules.tab", 4).unwrap();
        let geometry = plan_layout(&grid, &table, 0);

        // Table max (5) dominates grid max (3)
        assert_eq!(geometry.state_width, 3);
        assert_eq!(geometry.rows, 2);
        assert_eq!(geometry.cols, 2);
        assert_eq!(geometry.connection_num, 5);
    }

    #[test]
    fn test_max_m_blocks_passthrough() {
        let grid = parse_grid("0\n", "init.cas").unwrap();
        let table = compile_rules("", "rules.tab", 4).unwrap();
        let geometry = plan_layout(&grid, &table, 7);
        assert_eq!(geometry.max_m_blocks, 7);
    }
}
