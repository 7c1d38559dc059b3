//! Cellular-Automaton ROM Compiler
//!
//! Compile a textual initial-state matrix and a symbolic transition table
//! into the validated, alignment-padded structures the emitter renders.
//!
//! ## Example
//!
//! ```rust
//! use cellrom_compiler::{compile_rules, parse_grid, plan_layout};
//!
//! let grid = parse_grid("0 1\n1 0\n", "init.cas").unwrap();
//! let table = compile_rules("0 1 0 1 0 : 1\n", "rules.tab", 4).unwrap();
//! let geometry = plan_layout(&grid, &table, 0);
//!
//! assert_eq!(geometry.state_width, 1);
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod lexer;
pub mod rules;

pub use error::{CompileError, Result};
pub use grid::parse_grid;
pub use layout::plan_layout;
pub use rules::compile_rules;
