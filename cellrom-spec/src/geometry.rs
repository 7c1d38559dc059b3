//! Final geometry constants consumed by the emitter.

use crate::STEP_OVERHEAD_CYCLES;

/// Scalar constants describing the automaton and its rule ROM.
///
/// Assembled once by the layout planner after both input files have been
/// validated; every field lands verbatim in the emitted package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Vertical automaton size
    pub rows: usize,
    /// Horizontal automaton size
    pub cols: usize,
    /// Connectivity as a numeral, 5 or 9
    pub connection_num: usize,
    /// Bit width of one cell state
    pub state_width: u32,
    /// Parallel lookup ways in the rule ROM
    pub ways: usize,
    /// Bits indexing the valid ROM addresses
    pub address_width: u32,
    /// Addresses probed per calculation step (pre-padding count)
    pub valid_addresses: usize,
    /// Maximum number of cells whose ROM may live in an M-RAM block
    pub max_m_blocks: usize,
}

impl Geometry {
    /// Physical ROM depth, `2^address_width`
    pub fn rom_addresses(&self) -> usize {
        1 << self.address_width
    }

    /// Clock cycles needed per calculation step
    pub fn step_cycles(&self) -> usize {
        self.valid_addresses + STEP_OVERHEAD_CYCLES
    }
}
