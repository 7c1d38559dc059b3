//! `CELLULAR_AUTOMATON_CONFIG_PKG` rendering.
//!
//! The emitted text is parsed positionally by the hardware description:
//! rows and ROM addresses run from the highest index down to 0, ways run
//! high to low inside an address, and each way entry lists the output bit
//! string first followed by the inputs in reverse declared order.

use cellrom_spec::{Geometry, Grid, RuleTable};

use crate::binary::bin_str;

/// Continuation indent aligning under the `INIT_STATE` opening parenthesis
const INIT_INDENT: usize = 47;

/// Continuation indent aligning under the `TRANS_RULE_ROM` opening parenthesis
const ROM_INDENT: usize = 51;

/// Extra indent for way entries inside one ROM address
const WAY_INDENT: usize = 9;

/// Render the complete configuration package.
///
/// Deterministic: identical inputs always produce byte-identical text.
pub fn emit_package(geometry: &Geometry, grid: &Grid, table: &RuleTable) -> String {
    let mut out = String::new();
    out.push_str(&header());
    out.push_str(&declarations(geometry));
    out.push_str(&init_state(geometry, grid));
    out.push_str(&rule_rom(geometry, table));
    out.push_str(&footer());
    out
}

fn horizontal_rule() -> String {
    format!("{}\n", "-".repeat(80))
}

fn separator() -> String {
    format!("    -- {}\n", "-".repeat(73))
}

fn header() -> String {
    let mut out = String::new();
    out.push_str(&horizontal_rule());
    out.push_str("-- PROJECT: CELLULAR AUTOMATON FPGA\n");
    out.push_str(&horizontal_rule());
    out.push_str("-- LICENSE: The MIT License, please read LICENSE file\n");
    out.push_str(&horizontal_rule());
    out.push_str("-- This is a generated file containing definition of variables\n");
    out.push_str("-- for initial configuration and transition table of the Cellular Automaton.\n");
    out.push_str("library IEEE;\n");
    out.push_str("use IEEE.std_logic_1164.all;\n");
    out.push_str("use IEEE.numeric_std.all;\n");
    out.push('\n');
    out.push_str("package CELLULAR_AUTOMATON_CONFIG_PKG is\n");
    out
}

fn declarations(geometry: &Geometry) -> String {
    format!(
        r#"
    -- 2-logarithm function
    function log2(number : integer) return integer;

    -- Number of cells in one ROW
    constant ROW_SIZE      : integer := {cols};
    -- Number of cells in one COLUMN
    constant COL_SIZE      : integer := {rows};

    -- Converting connection type to number
    constant CONNECTION_NUM : integer := {connection_num};

    -- Width of signal in which a Cell state is expressed
    constant C_STATE_WIDTH : integer := {state_width};

    -- Number of parallel ways in Cell associative ROM for transition rules
    constant WAYS_N : integer := {ways};

    -- Address width of Cell associative ROM for transition rules
    constant ROM_ADDR_WIDTH : integer := {address_width};

    -- Number of actually valid ROM items
    constant ACT_ROM_ITEMS : integer := {valid_addresses};

    -- Number of cycles needed to complete one calculation step
    constant GEN_CYCLES : integer := ACT_ROM_ITEMS+3;

    -- Maximum number of Cells, which can store their ROM in an M-RAM block
    constant MAX_M_BLOCKS : integer := {max_m_blocks};

    -- Cell grid types
    type cell_state_t    is array (C_STATE_WIDTH -1 downto 0) of std_logic;
    type cell_row_t      is array (ROW_SIZE      -1 downto 0) of cell_state_t;
    type cell_field_t    is array (COL_SIZE      -1 downto 0) of cell_row_t;
    type neigh_t         is array (CONNECTION_NUM-1 downto 0) of cell_state_t;
    type neigh_arr_t     is array (ROW_SIZE      -1 downto 0) of neigh_t;
    type neigh_arr_2d_t  is array (COL_SIZE      -1 downto 0) of neigh_arr_t;

    -- Vector array types
    type trans_rule_t      is array (CONNECTION_NUM+1 -1 downto 0) of cell_state_t; -- ('high => output, others => input)
    type trans_rule_pack_t is array (WAYS_N           -1 downto 0) of trans_rule_t;
    type trans_rule_rom_t  is array (2**ROM_ADDR_WIDTH-1 downto 0) of trans_rule_pack_t;

"#,
        cols = geometry.cols,
        rows = geometry.rows,
        connection_num = geometry.connection_num,
        state_width = geometry.state_width,
        ways = geometry.ways,
        address_width = geometry.address_width,
        valid_addresses = geometry.valid_addresses,
        max_m_blocks = geometry.max_m_blocks,
    )
}

/// Grid rows from `rows-1` down to 0, cells from 0 up to `cols-1`.
fn init_state(geometry: &Geometry, grid: &Grid) -> String {
    let mut out = String::from("    -- Initial State\n");
    out.push_str(
        "    -- It is written using 'x => y' notation, so it would work even when one of the dimensions has size 1.\n",
    );
    out.push_str("    constant INIT_STATE     : cell_field_t := (");

    let mut line = String::new();
    for row in (0..grid.rows()).rev() {
        line.push_str(&format!(" {row:03} => ("));
        let cells: Vec<String> = grid
            .row(row)
            .iter()
            .enumerate()
            .map(|(col, &state)| {
                format!(" {col:03} => \"{}\"", bin_str(state, geometry.state_width))
            })
            .collect();
        line.push_str(&cells.join(","));
        line.push(')');
        line.push_str(if row > 0 { ",\n" } else { ");\n" });
        out.push_str(&line);
        line = " ".repeat(INIT_INDENT);
    }
    out.push('\n');
    out
}

/// ROM addresses from `2^address_width - 1` down to 0, ways high to low;
/// each way entry holds the output first, then the inputs reversed.
fn rule_rom(geometry: &Geometry, table: &RuleTable) -> String {
    let mut out = String::from("    -- Transition rule ROM itself\n");
    out.push_str(
        "    -- It is written using 'x => y' notation, so it would work even when one of the dimensions has size 1.\n",
    );
    out.push_str("    constant TRANS_RULE_ROM : trans_rule_rom_t := (");

    let width = geometry.state_width;
    let mut line = String::new();
    for address in (0..table.addresses()).rev() {
        line.push_str(&format!(" {address:03} => ("));
        for way in (0..table.ways()).rev() {
            line.push_str(&format!(" {way:03} => ("));

            let rule = table.rule(address, way);
            line.push_str(&format!("\"{}\",", bin_str(rule.output, width)));
            let inputs: Vec<String> = rule
                .inputs
                .iter()
                .rev()
                .map(|&state| format!("\"{}\"", bin_str(state, width)))
                .collect();
            line.push_str(&inputs.join(","));
            line.push(')');

            if way == 0 {
                line.push(')');
                line.push_str(if address == 0 { ");" } else { "," });
            } else {
                line.push(',');
            }
            line.push('\n');
            out.push_str(&line);

            line = " ".repeat(ROM_INDENT);
            if way != 0 {
                line.push_str(&" ".repeat(WAY_INDENT));
            }
        }
    }
    out.push('\n');
    out
}

fn footer() -> String {
    let mut out = String::new();
    out.push_str(&separator());
    out.push('\n');
    out.push_str("end CELLULAR_AUTOMATON_CONFIG_PKG;\n");
    out.push('\n');
    out.push_str("package body CELLULAR_AUTOMATON_CONFIG_PKG is\n");
    out.push_str("\n\n");
    out.push_str(&separator());
    out.push('\n');
    out.push_str(
        r#"    function log2(number : integer) return integer is
        variable w : integer := 0;
    begin
        if (number<1) then
            return 0;
        end if;

        while (2**w<number) loop
            w := w+1;
        end loop;

        return w;
    end function;

"#,
    );
    out.push_str(&separator());
    out.push('\n');
    out.push_str("end;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellrom_spec::{Arity, Rule};

    fn sample_geometry() -> Geometry {
        Geometry {
            rows: 2,
            cols: 2,
            connection_num: 5,
            state_width: 1,
            ways: 2,
            address_width: 0,
            valid_addresses: 1,
            max_m_blocks: 0,
        }
    }

    fn sample_grid() -> Grid {
        Grid::new(vec![vec![0, 1], vec![1, 0]], 1)
    }

    fn sample_table() -> RuleTable {
        let rules = vec![
            Rule {
                inputs: vec![0, 1, 0, 1, 0],
                output: 1,
            },
            Rule {
                inputs: vec![1, 1, 1, 1, 1],
                output: 0,
            },
        ];
        RuleTable::new(rules, Arity::Five, 2, 0, 1, 1)
    }

    #[test]
    fn test_init_state_rows_descend() {
        let text = init_state(&sample_geometry(), &sample_grid());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[2],
            "    constant INIT_STATE     : cell_field_t := ( 001 => ( 000 => \"1\", 001 => \"0\"),"
        );
        assert_eq!(
            lines[3],
            format!("{}000 => ( 000 => \"0\", 001 => \"1\"));", " ".repeat(48))
        );
    }

    #[test]
    fn test_rule_rom_output_first_inputs_reversed() {
        let text = rule_rom(&sample_geometry(), &sample_table());
        let lines: Vec<&str> = text.lines().collect();
        // Way 1 is rule 1: output 0, inputs all 1
        assert_eq!(
            lines[2],
            "    constant TRANS_RULE_ROM : trans_rule_rom_t := ( 000 => ( 001 => (\"0\",\"1\",\"1\",\"1\",\"1\",\"1\"),"
        );
        // Way 0 is rule 0: output 1, inputs 0 1 0 1 0 reversed
        assert_eq!(
            lines[3],
            format!(
                "{}000 => (\"1\",\"0\",\"1\",\"0\",\"1\",\"0\")));",
                " ".repeat(61)
            )
        );
    }

    #[test]
    fn test_emission_is_deterministic() {
        let a = emit_package(&sample_geometry(), &sample_grid(), &sample_table());
        let b = emit_package(&sample_geometry(), &sample_grid(), &sample_table());
        assert_eq!(a, b);
    }
}
