//! Bounded coordinates and Moore neighborhood math

use crate::error::{LifeError, LifeResult};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Default upper bound for both coordinate axes
pub const DEFAULT_MAX_COORD: u32 = 30;

/// Inclusive bounds of the coordinate space: both axes span `[0, max_coord]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    max_coord: u32,
}

impl Bounds {
    pub fn new(max_coord: u32) -> Self {
        Self { max_coord }
    }

    pub fn max_coord(&self) -> u32 {
        self.max_coord
    }

    /// Number of coordinates along one axis
    pub fn side(&self) -> u64 {
        u64::from(self.max_coord) + 1
    }

    /// Total number of coordinates in the space, `None` if it does not fit in `usize`
    pub fn capacity(&self) -> Option<usize> {
        let side = usize::try_from(self.side()).ok()?;
        side.checked_mul(side)
    }

    /// Check whether `(x, y)` lies inside the bounds
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let max = i64::from(self.max_coord);
        (0..=max).contains(&x) && (0..=max).contains(&y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COORD)
    }
}

/// An immutable position in the universe.
///
/// Equality and hashing are structural, so coordinates are used directly as
/// map keys. Ordering is row-major (`y` first, then `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    x: i64,
    y: i64,
}

impl Coordinate {
    /// Create a coordinate, rejecting components outside `bounds`
    pub fn new(x: i64, y: i64, bounds: Bounds) -> LifeResult<Self> {
        if !bounds.contains(x, y) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                max_coord: bounds.max_coord(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Moore neighborhood of this coordinate, clipped to `bounds`.
    ///
    /// There is no wraparound: edge coordinates have fewer than 8 neighbours.
    pub fn neighbours(&self, bounds: Bounds) -> Vec<Coordinate> {
        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| Coordinate::new(self.x + dx, self.y + dy, bounds).ok())
            .collect()
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
