//! Property tests for the bit-width resolver

use cellrom_spec::{ceil_log2, resolve_width};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_width_covers_value(max_value in 0u64..=u32::MAX as u64) {
        let width = resolve_width(max_value);
        prop_assert!(width >= 1);
        // 2^width > max_value
        prop_assert!((1u128 << width) > max_value as u128);
    }

    #[test]
    fn test_width_is_minimal(max_value in 1u64..=u32::MAX as u64) {
        let width = resolve_width(max_value);
        // One bit less would no longer cover max_value
        if width > 1 {
            prop_assert!((1u128 << (width - 1)) <= max_value as u128);
        }
    }

    #[test]
    fn test_ceil_log2_bounds(n in 1usize..=1 << 20) {
        let w = ceil_log2(n);
        prop_assert!(1usize << w >= n);
        if w > 0 {
            prop_assert!(1usize << (w - 1) < n);
        }
    }

    #[test]
    fn test_width_monotone(a in 0u64..=1 << 32, b in 0u64..=1 << 32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resolve_width(lo) <= resolve_width(hi));
    }
}
