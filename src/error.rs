//! Error types raised by the Game of Life core

use crate::game_of_life::Coordinate;
use thiserror::Error;

/// Invariant violations surfaced while building coordinates, cells and universes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("coordinate ({x}, {y}) is outside the universe bounds [0, {max_coord}]")]
    OutOfBounds { x: i64, y: i64, max_coord: u32 },

    #[error("a cell already occupies {0}")]
    DuplicateLocation(Coordinate),

    /// Coordinates must be given together or omitted together.
    #[error("cell spec must give both x and y or neither (x = {x:?}, y = {y:?})")]
    InvalidCellSpec { x: Option<i64>, y: Option<i64> },

    #[error("cannot place {requested} random cells, only {available} free coordinates left")]
    UniverseFull { requested: usize, available: usize },

    /// The coordinate source kept returning occupied coordinates.
    #[error("placed {placed} of {requested} random cells before {attempts} draws in a row hit occupied coordinates")]
    PlacementStalled {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
