//! `cellrom` — compile an initial-state grid and a symbolic transition table
//! into the `CELLULAR_AUTOMATON_CONFIG_PKG` VHDL package.
//!
//! **Usage:**
//! ```text
//! cellrom <init_state_file> <trans_table_file> [--rom-ways N] [--max-m-block-cells N] [--output PATH]
//! ```
//!
//! Exits 0 on success, 1 for a malformed initial-state file (or unreadable
//! input), 2 for a malformed transition table.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cellrom_compiler::{compile_rules, parse_grid, plan_layout, CompileError};
use cellrom_emitter::emit_package;

/// Compile cellular-automaton configuration into a VHDL package.
#[derive(Parser)]
#[command(
    name = "cellrom",
    about = "Compile an automaton initial state and transition table into a VHDL config package"
)]
struct Args {
    /// Input '.cas' file with the initial automaton state
    init_state_file: PathBuf,

    /// Input '.tab' file with explicit automaton transition rules
    trans_table_file: PathBuf,

    /// Number of parallel ways in the Cell associative ROM for transition rules
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    rom_ways: u32,

    /// Maximum number of Cells which can store their ROM in an M-RAM block
    /// (the rest will be logic LUTs instead)
    #[arg(long, default_value_t = 0)]
    max_m_block_cells: u32,

    /// Name of the output file
    #[arg(long, default_value = "cellular_automaton_config_pkg.vhd")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), CompileError> {
    let init_source = fs::read_to_string(&args.init_state_file)?;
    let table_source = fs::read_to_string(&args.trans_table_file)?;

    let init_origin = args.init_state_file.display().to_string();
    let table_origin = args.trans_table_file.display().to_string();

    let grid = parse_grid(&init_source, &init_origin)?;
    let table = compile_rules(&table_source, &table_origin, args.rom_ways as usize)?;
    let geometry = plan_layout(&grid, &table, args.max_m_block_cells as usize);

    let text = emit_package(&geometry, &grid, &table);

    // The output file is touched only after every stage has succeeded, so a
    // failed run never leaves a truncated artifact under the final name.
    fs::write(&args.output, text)?;
    tracing::info!("wrote {}", args.output.display());
    Ok(())
}
