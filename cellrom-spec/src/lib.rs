//! # Cellular-Automaton ROM Compiler Specification
//!
//! Core types shared by the compiler and the emitter:
//! - [`Grid`]: the rectangular initial-state matrix
//! - [`Arity`], [`Rule`], [`RuleTable`]: the transition-rule ROM contents
//! - [`Geometry`]: the scalar constants emitted into the hardware package
//! - [`resolve_width`]: minimal bit width for an observed value range
//!
//! ## Example
//!
//! ```rust
//! use cellrom_spec::{resolve_width, Arity};
//!
//! assert_eq!(resolve_width(7), 3);
//! assert_eq!(Arity::Five.inputs(), 5);
//! ```

pub mod geometry;
pub mod grid;
pub mod rule;
pub mod width;

pub use geometry::Geometry;
pub use grid::Grid;
pub use rule::{Arity, Rule, RuleTable};
pub use width::{ceil_log2, resolve_width};

/// Default number of parallel lookup ways in the transition-rule ROM
pub const DEFAULT_ROM_WAYS: usize = 4;

/// Fixed pipeline overhead added to the per-step cycle count
pub const STEP_OVERHEAD_CYCLES: usize = 3;
