//! Sparse universe of cells keyed by unique coordinate

use super::placement::CoordinateSource;
use super::{Bounds, Cell, Coordinate};
use crate::error::{LifeError, LifeResult};
use std::collections::BTreeMap;

/// Fewest consecutive occupied draws tolerated before random placement gives up
const MIN_PLACEMENT_ATTEMPTS: usize = 64;

/// One generation of the automaton.
///
/// Coordinates with no stored cell count as dead. Iteration is row-major and
/// stable. Once a universe is handed to the engine it is only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    bounds: Bounds,
    cells: BTreeMap<Coordinate, Cell>,
}

impl Universe {
    /// Create an empty universe
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: BTreeMap::new(),
        }
    }

    /// Build a universe from cells, failing on the first duplicated coordinate
    pub fn from_cells<I>(bounds: Bounds, cells: I) -> LifeResult<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut universe = Self::new(bounds);
        universe.add_cells(cells)?;
        Ok(universe)
    }

    /// Assemble a universe from cells already known to be unique and in bounds
    pub(crate) fn from_unique_cells<I>(bounds: Bounds, cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            bounds,
            cells: cells.into_iter().map(|cell| (cell.coordinate(), cell)).collect(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Insert a cell at a free coordinate
    pub fn add_cell(&mut self, cell: Cell) -> LifeResult<()> {
        let coordinate = cell.coordinate();
        if !self.bounds.contains(coordinate.x(), coordinate.y()) {
            return Err(LifeError::OutOfBounds {
                x: coordinate.x(),
                y: coordinate.y(),
                max_coord: self.bounds.max_coord(),
            });
        }
        if self.cells.contains_key(&coordinate) {
            return Err(LifeError::DuplicateLocation(coordinate));
        }
        self.cells.insert(coordinate, cell);
        Ok(())
    }

    /// Insert cells in order, stopping at the first error.
    ///
    /// Cells added before the failing one stay in the universe.
    pub fn add_cells<I>(&mut self, cells: I) -> LifeResult<()>
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.add_cell(cell)?;
        }
        Ok(())
    }

    /// Place `count` alive cells at distinct free coordinates drawn from `source`.
    ///
    /// Occupied draws are retried. After `8 * capacity` (at least 64) occupied
    /// draws in a row placement stops with `PlacementStalled`; cells placed so
    /// far stay in the universe.
    pub fn populate_random<S: CoordinateSource + ?Sized>(&mut self, count: usize, source: &mut S) -> LifeResult<()> {
        let capacity = self.bounds.capacity().unwrap_or(usize::MAX);
        let available = capacity - self.cells.len();
        if count > available {
            return Err(LifeError::UniverseFull {
                requested: count,
                available,
            });
        }

        let max_attempts = capacity.saturating_mul(8).max(MIN_PLACEMENT_ATTEMPTS);
        let mut placed = 0;
        let mut misses = 0;
        while placed < count {
            let coordinate = source.next_coordinate(self.bounds)?;
            if self.cells.contains_key(&coordinate) {
                misses += 1;
                if misses >= max_attempts {
                    return Err(LifeError::PlacementStalled {
                        placed,
                        requested: count,
                        attempts: misses,
                    });
                }
                continue;
            }
            self.add_cell(Cell::alive(coordinate))?;
            placed += 1;
            misses = 0;
        }
        Ok(())
    }

    pub fn get(&self, coordinate: &Coordinate) -> Option<&Cell> {
        self.cells.get(coordinate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn get_cells(&self) -> Vec<Cell> {
        self.cells.values().copied().collect()
    }

    pub fn get_alive_cells(&self) -> Vec<Cell> {
        self.cells.values().filter(|cell| cell.is_alive()).copied().collect()
    }

    pub fn alive_coordinates(&self) -> Vec<Coordinate> {
        self.cells
            .values()
            .filter(|cell| cell.is_alive())
            .map(Cell::coordinate)
            .collect()
    }

    /// Moore neighbourhood of `coordinate` within `bounds`
    pub fn neighbour_coordinates(coordinate: Coordinate, bounds: Bounds) -> Vec<Coordinate> {
        coordinate.neighbours(bounds)
    }

    /// Stored cells adjacent to `cell`. Unstored coordinates are left out.
    pub fn get_neighbours(&self, cell: &Cell) -> Vec<Cell> {
        cell.coordinate()
            .neighbours(self.bounds)
            .iter()
            .filter_map(|coordinate| self.cells.get(coordinate))
            .copied()
            .collect()
    }

    pub fn get_alive_neighbours(&self, cell: &Cell) -> Vec<Cell> {
        self.get_neighbours(cell)
            .into_iter()
            .filter(Cell::is_alive)
            .collect()
    }

    /// Number of alive cells around `coordinate`, whether or not it is stored
    pub fn alive_neighbour_count(&self, coordinate: Coordinate) -> u8 {
        coordinate
            .neighbours(self.bounds)
            .iter()
            .filter(|neighbour| self.is_alive_at(neighbour))
            .count() as u8
    }

    pub fn is_alive_at(&self, coordinate: &Coordinate) -> bool {
        self.cells.get(coordinate).is_some_and(Cell::is_alive)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_alive()).count()
    }

    /// Number of stored cells, dead ones included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when no stored cell is alive
    pub fn is_extinct(&self) -> bool {
        !self.cells.values().any(Cell::is_alive)
    }

    /// Compare alive cells only, ignoring stored dead cells
    pub fn same_alive_cells(&self, other: &Universe) -> bool {
        self.cells
            .values()
            .filter(|cell| cell.is_alive())
            .eq(other.cells.values().filter(|cell| cell.is_alive()))
    }
}
