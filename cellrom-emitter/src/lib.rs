//! VHDL Configuration Package Emitter
//!
//! Render the compiled grid and rule ROM as the
//! `CELLULAR_AUTOMATON_CONFIG_PKG` VHDL package. The textual layout is a
//! binding contract with the hardware description that reads the constants
//! positionally; bit ordering, index direction, and padding counts must not
//! change.

pub mod binary;
pub mod package;

pub use binary::bin_str;
pub use package::emit_package;
