//! The growth discipline shared by every array-backed collection in this crate.

use super::error::CapacityOverflow;

/// The capacity given to collections created without an explicit one, and the smallest capacity a
/// collection grows to.
pub const DEFAULT_CAP: usize = 5;

// Capacity grows by a factor of GROWTH_NUMERATOR / GROWTH_DENOMINATOR, rounded up.
const GROWTH_NUMERATOR: usize = 3;
const GROWTH_DENOMINATOR: usize = 2;

const MAX_ALLOC_SIZE: usize = isize::MAX as usize;

/// The largest number of `T`s that a single allocation can hold. Zero-sized types never allocate,
/// so they are only limited by the range of [`usize`].
pub(crate) const fn max_cap<T>() -> usize {
    match size_of::<T>() {
        0 => usize::MAX,
        size => MAX_ALLOC_SIZE / size,
    }
}

/// Calculates the capacity that a full collection at `cap` should grow to:
/// `max(DEFAULT_CAP, ceil(cap * 1.5))`, clamped to `max`.
///
/// # Errors
/// Returns [`CapacityOverflow`] if `cap` has already reached `max`, because no growth is possible.
pub(crate) fn grown_cap(cap: usize, max: usize) -> Result<usize, CapacityOverflow> {
    if cap >= max {
        return Err(CapacityOverflow);
    }

    // cap + ceil(cap / 2) == ceil(cap * 3 / 2), without the intermediate overflow.
    let extra = (cap * (GROWTH_NUMERATOR - GROWTH_DENOMINATOR)).div_ceil(GROWTH_DENOMINATOR);
    let new_cap = cap.saturating_add(extra).max(DEFAULT_CAP);

    Ok(new_cap.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_sequence() {
        let mut cap = 0;
        let mut seen = [0; 6];
        for slot in seen.iter_mut() {
            cap = grown_cap(cap, usize::MAX).expect("far from the maximum");
            *slot = cap;
        }
        assert_eq!(
            seen,
            [5, 8, 12, 18, 27, 41],
            "Capacity should start at the default and grow by 1.5x, rounding up."
        );
        assert_eq!(grown_cap(1, 100), Ok(DEFAULT_CAP), "Small capacities jump to the default.");
    }

    #[test]
    fn test_growth_is_capped() {
        assert_eq!(grown_cap(90, 100), Ok(100), "Growth should stop at the maximum.");
        assert_eq!(grown_cap(99, 100), Ok(100));
        assert_eq!(grown_cap(100, 100), Err(CapacityOverflow), "No growth past the maximum.");
        assert_eq!(grown_cap(3, 4), Ok(4), "Even the default is clamped to the maximum.");

        let huge = usize::MAX - 1;
        assert_eq!(
            grown_cap(huge, usize::MAX),
            Ok(usize::MAX),
            "Growth near usize::MAX should saturate rather than overflow."
        );
    }

    #[test]
    fn test_max_cap() {
        assert_eq!(max_cap::<()>(), usize::MAX);
        assert_eq!(max_cap::<u8>(), isize::MAX as usize);
        assert_eq!(max_cap::<u64>(), isize::MAX as usize / 8);
    }
}
