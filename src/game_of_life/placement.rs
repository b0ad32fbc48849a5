//! Coordinate generation strategies for cells placed without explicit coordinates

use super::{Bounds, Coordinate};
use crate::error::LifeResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies coordinates for cells whose position was left unspecified
pub trait CoordinateSource {
    fn next_coordinate(&mut self, bounds: Bounds) -> LifeResult<Coordinate>;
}

/// Uniformly random placement, optionally seeded for reproducible runs
pub struct RandomPlacement {
    rng: StdRng,
}

impl RandomPlacement {
    /// Placement seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Placement with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateSource for RandomPlacement {
    fn next_coordinate(&mut self, bounds: Bounds) -> LifeResult<Coordinate> {
        let max = i64::from(bounds.max_coord());
        let x = self.rng.random_range(0..=max);
        let y = self.rng.random_range(0..=max);
        Coordinate::new(x, y, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_placement_stays_in_bounds() {
        let bounds = Bounds::new(4);
        let mut placement = RandomPlacement::seeded(7);
        for _ in 0..200 {
            let c = placement.next_coordinate(bounds).unwrap();
            assert!(bounds.contains(c.x(), c.y()));
        }
    }

    #[test]
    fn test_seeded_placement_is_reproducible() {
        let bounds = Bounds::default();
        let mut a = RandomPlacement::seeded(42);
        let mut b = RandomPlacement::seeded(42);
        let first: Vec<_> = (0..10).map(|_| a.next_coordinate(bounds).unwrap()).collect();
        let second: Vec<_> = (0..10).map(|_| b.next_coordinate(bounds).unwrap()).collect();
        assert_eq!(first, second);
    }
}
