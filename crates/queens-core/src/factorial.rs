/// Largest board size whose factorial fits in a `u64`.
pub const LARGEST_EXACT_BOARD: u64 = 20;

/// Computes `n!`, wrapping silently once the result leaves the `u64` range.
pub fn factorial(n: u64) -> u64 {
    (2..=n).fold(1u64, |acc, k| acc.wrapping_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_one() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
    }

    #[test]
    fn matches_known_values() {
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(8), 40_320);
        assert_eq!(factorial(12), 479_001_600);
    }

    #[test]
    fn largest_exact_board_fits() {
        assert_eq!(factorial(LARGEST_EXACT_BOARD), 2_432_902_008_176_640_000);
        assert!(factorial(LARGEST_EXACT_BOARD).checked_mul(21).is_none());
    }

    #[test]
    fn wraps_past_the_exact_range() {
        let expected = factorial(20).wrapping_mul(21);
        assert_eq!(factorial(21), expected);
    }
}
