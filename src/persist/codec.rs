//! Byte encoding of a solution's visiting order.

use crate::error::{AnnealError, Result};
use crate::tsp::{Solution, SolutionFactory};
use serde::{Deserialize, Serialize};

/// On-disk form of a solution: the tour plus the city count it was built
/// for. City coordinates are regenerated, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTour {
    pub city_count: usize,
    pub tour: Vec<usize>,
}

impl PersistedTour {
    pub fn from_solution(solution: &Solution) -> Self {
        Self {
            city_count: solution.city_count(),
            tour: solution.tour().to_vec(),
        }
    }

    /// Rebuilds the solution over `factory`'s cities.
    ///
    /// Fails with [`AnnealError::ConfigurationMismatch`] if either the
    /// recorded city count or the tour length differs from the factory's.
    pub fn into_solution(self, factory: &SolutionFactory) -> Result<Solution> {
        if self.city_count != factory.city_count() {
            return Err(AnnealError::mismatch(factory.city_count(), self.city_count));
        }
        factory.solution_from_tour(self.tour)
    }
}

/// Encodes `solution` as a JSON blob.
pub fn encode_solution(solution: &Solution) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&PersistedTour::from_solution(solution))?)
}

/// Decodes a blob written by [`encode_solution`].
pub fn decode_solution(bytes: &[u8], factory: &SolutionFactory) -> Result<Solution> {
    let persisted: PersistedTour = serde_json::from_slice(bytes)?;
    persisted.into_solution(factory)
}
