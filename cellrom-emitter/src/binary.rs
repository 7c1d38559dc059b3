//! Fixed-width binary rendering of cell states.

/// Render `value` as exactly `width` binary digits, most-significant bit
/// first.
///
/// Values wider than `width` are silently truncated to their low `width`
/// bits. The downstream package format relies on this narrowing, so it stays
/// a rendering rule rather than a range check. `width` must be at least 1.
pub fn bin_str(value: u64, width: u32) -> String {
    let masked = if width >= u64::BITS {
        value
    } else {
        value & ((1u64 << width) - 1)
    };
    format!("{masked:0width$b}", width = width as usize)
}
