//! Visiting-order validation.

use crate::error::{AnnealError, Result};

/// Returns `true` if `tour` contains every index of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    validate_tour(tour, n).is_ok()
}

/// Checks that `tour` is a permutation of `0..n`.
///
/// A length difference is reported as
/// [`AnnealError::ConfigurationMismatch`]; duplicates and out-of-range
/// indices as [`AnnealError::InvalidTour`].
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(AnnealError::mismatch(n, tour.len()));
    }
    let mut seen = vec![false; n];
    for (pos, &city) in tour.iter().enumerate() {
        if city >= n {
            return Err(AnnealError::InvalidTour {
                reason: format!("city {city} at position {pos} is out of range 0..{n}"),
            });
        }
        if seen[city] {
            return Err(AnnealError::InvalidTour {
                reason: format!("city {city} visited twice (again at position {pos})"),
            });
        }
        seen[city] = true;
    }
    Ok(())
}
