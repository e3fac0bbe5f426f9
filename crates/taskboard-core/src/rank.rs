//! Sparse rank arithmetic.
//!
//! Ranks are spaced [`RANK_STEP`] apart so a column only needs renumbering
//! where indices actually shifted. They saturate at [`RANK_CAP`]: from index
//! 999 onwards every slot shares the same rank.

/// Distance between neighbouring canonical ranks.
pub const RANK_STEP: i64 = 1_000;

/// Highest rank ever assigned by reindexing.
pub const RANK_CAP: i64 = 1_000_000;

/// Rank of a new task in an empty column.
pub const FIRST_NEW_RANK: i64 = 1;

/// Canonical rank for a 0-based column index.
pub fn canonical_rank(index: usize) -> i64 {
    let slot = i64::try_from(index).unwrap_or(i64::MAX).saturating_add(1);
    slot.saturating_mul(RANK_STEP).min(RANK_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rank_is_one_based_and_spaced() {
        assert_eq!(canonical_rank(0), 1_000);
        assert_eq!(canonical_rank(1), 2_000);
        assert_eq!(canonical_rank(41), 42_000);
    }

    #[test]
    fn test_canonical_rank_saturates_at_cap() {
        assert_eq!(canonical_rank(998), 999_000);
        assert_eq!(canonical_rank(999), RANK_CAP);
        assert_eq!(canonical_rank(5_000), RANK_CAP);
        assert_eq!(canonical_rank(usize::MAX), RANK_CAP);
    }
}
