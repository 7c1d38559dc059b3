//! Minimal bit-width computation for observed value ranges.

/// Ceiling of the base-2 logarithm; `ceil_log2(0)` and `ceil_log2(1)` are 0.
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        (n - 1).ilog2() + 1
    }
}

/// Minimal unsigned bit width such that `2^width > max_value`.
///
/// A zero-only domain still needs a signal, so the result is never below 1:
/// `resolve_width(0) == 1`.
pub fn resolve_width(max_value: u64) -> u32 {
    if max_value == 0 {
        1
    } else {
        u64::BITS - max_value.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_width_boundaries() {
        assert_eq!(resolve_width(0), 1);
        assert_eq!(resolve_width(1), 1);
        assert_eq!(resolve_width(2), 2);
        assert_eq!(resolve_width(3), 2);
        assert_eq!(resolve_width(4), 3);
        assert_eq!(resolve_width(7), 3);
        assert_eq!(resolve_width(8), 4);
        assert_eq!(resolve_width(255), 8);
        assert_eq!(resolve_width(256), 9);
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
    }
}
