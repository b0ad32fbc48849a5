//! Cells and the partially specified cells accepted at the input boundary

use super::placement::CoordinateSource;
use super::{Bounds, Coordinate};
use crate::error::{LifeError, LifeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status of a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Alive,
    Dead,
}

impl Status {
    pub const fn is_alive(self) -> bool {
        matches!(self, Status::Alive)
    }
}

/// A coordinate plus a life status. Cells are plain values and know nothing
/// about the universe holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    coordinate: Coordinate,
    status: Status,
}

impl Cell {
    pub fn new(status: Status, coordinate: Coordinate) -> Self {
        Self { coordinate, status }
    }

    pub fn alive(coordinate: Coordinate) -> Self {
        Self::new(Status::Alive, coordinate)
    }

    pub fn dead(coordinate: Coordinate) -> Self {
        Self::new(Status::Dead, coordinate)
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    /// Same position, different status
    pub fn with_status(&self, status: Status) -> Self {
        Self::new(status, self.coordinate)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_alive() { "alive" } else { "dead" };
        write!(f, "{} {}", self.coordinate, status)
    }
}

/// A cell description as supplied by configuration or callers.
///
/// `x` and `y` must be given together; when both are omitted the position is
/// drawn from a [`CoordinateSource`]. A missing status means alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl CellSpec {
    pub fn at(x: i64, y: i64, status: Status) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            status: Some(status),
        }
    }

    /// A spec with no coordinates, to be placed by a coordinate source
    pub fn unplaced(status: Status) -> Self {
        Self {
            x: None,
            y: None,
            status: Some(status),
        }
    }

    /// Turn the spec into a concrete cell
    pub fn resolve<S: CoordinateSource + ?Sized>(&self, bounds: Bounds, source: &mut S) -> LifeResult<Cell> {
        let coordinate = match (self.x, self.y) {
            (Some(x), Some(y)) => Coordinate::new(x, y, bounds)?,
            (None, None) => source.next_coordinate(bounds)?,
            (x, y) => return Err(LifeError::InvalidCellSpec { x, y }),
        };
        Ok(Cell::new(self.status.unwrap_or_default(), coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::placement::RandomPlacement;

    fn coord(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y, Bounds::default()).unwrap()
    }

    #[test]
    fn test_cell_status() {
        assert!(Cell::alive(coord(1, 1)).is_alive());
        assert!(!Cell::dead(coord(1, 1)).is_alive());
        assert_eq!(Status::default(), Status::Alive);
    }

    #[test]
    fn test_cell_equality() {
        assert_eq!(Cell::alive(coord(2, 3)), Cell::new(Status::Alive, coord(2, 3)));
        assert_ne!(Cell::alive(coord(2, 3)), Cell::dead(coord(2, 3)));
        assert_ne!(Cell::alive(coord(2, 3)), Cell::alive(coord(3, 2)));
    }

    #[test]
    fn test_spec_with_coordinates() {
        let mut placement = RandomPlacement::seeded(1);
        let cell = CellSpec::at(8, 30, Status::Alive)
            .resolve(Bounds::default(), &mut placement)
            .unwrap();
        assert_eq!(cell.coordinate().x(), 8);
        assert_eq!(cell.coordinate().y(), 30);
    }

    #[test]
    fn test_spec_status_defaults_to_alive() {
        let mut placement = RandomPlacement::seeded(1);
        let spec = CellSpec {
            x: Some(3),
            y: Some(3),
            status: None,
        };
        let cell = spec.resolve(Bounds::default(), &mut placement).unwrap();
        assert!(cell.is_alive());
    }

    #[test]
    fn test_spec_missing_one_component() {
        let mut placement = RandomPlacement::seeded(1);
        let only_x = CellSpec {
            x: Some(30),
            y: None,
            status: Some(Status::Dead),
        };
        assert_eq!(
            only_x.resolve(Bounds::default(), &mut placement),
            Err(LifeError::InvalidCellSpec { x: Some(30), y: None })
        );

        let only_y = CellSpec {
            x: None,
            y: Some(9),
            status: Some(Status::Dead),
        };
        assert!(matches!(
            only_y.resolve(Bounds::default(), &mut placement),
            Err(LifeError::InvalidCellSpec { .. })
        ));
    }

    #[test]
    fn test_spec_out_of_bounds() {
        let mut placement = RandomPlacement::seeded(1);
        let result = CellSpec::at(8, 92, Status::Alive).resolve(Bounds::default(), &mut placement);
        assert!(matches!(result, Err(LifeError::OutOfBounds { y: 92, .. })));
    }

    #[test]
    fn test_unplaced_spec_uses_source() {
        let bounds = Bounds::new(5);
        let mut placement = RandomPlacement::seeded(3);
        let cell = CellSpec::unplaced(Status::Dead).resolve(bounds, &mut placement).unwrap();
        assert!(!cell.is_alive());
        assert!(bounds.contains(cell.coordinate().x(), cell.coordinate().y()));
    }

    #[test]
    fn test_spec_from_yaml() {
        let specs: Vec<CellSpec> = serde_yaml::from_str("- { x: 1, y: 2 }\n- { status: dead }\n").unwrap();
        assert_eq!(specs[0], CellSpec { x: Some(1), y: Some(2), status: None });
        assert_eq!(specs[1], CellSpec::unplaced(Status::Dead));
    }
}
