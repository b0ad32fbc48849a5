//! Generation transitions

use super::{Cell, Coordinate, RuleSet, Status, Universe};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Candidate counts at or above this are evaluated in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Applies a rule set to whole universes, one generation at a time.
///
/// Every candidate coordinate is evaluated against the input generation and
/// written into a fresh universe, so no rule ever sees a neighbour that has
/// already been updated in the same tick.
#[derive(Debug)]
pub struct GenerationEngine {
    rules: RuleSet,
    parallel_threshold: usize,
    stop_when_stable: bool,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No alive cells remain
    Extinct,
    /// The alive cells no longer change
    Stable,
    /// The alive cells repeat with the given period
    Oscillating { period: usize },
    /// The generation limit was reached
    Limit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Extinct => write!(f, "extinct"),
            Termination::Stable => write!(f, "still life"),
            Termination::Oscillating { period } => write!(f, "oscillator (period {})", period),
            Termination::Limit => write!(f, "generation limit reached"),
        }
    }
}

/// Outcome of [`GenerationEngine::run`]
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generations: usize,
    pub termination: Termination,
    pub initial_population: usize,
    pub final_universe: Universe,
}

impl RunSummary {
    pub fn final_population(&self) -> usize {
        self.final_universe.population()
    }
}

impl GenerationEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            stop_when_stable: true,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_stop_when_stable(mut self, stop_when_stable: bool) -> Self {
        self.stop_when_stable = stop_when_stable;
        self
    }

    /// Coordinates whose status may change: everything stored plus the
    /// neighbourhood of every alive cell
    pub fn candidates(universe: &Universe) -> BTreeSet<Coordinate> {
        let bounds = universe.bounds();
        let mut candidates: BTreeSet<Coordinate> = universe.iter().map(Cell::coordinate).collect();
        for cell in universe.iter().filter(|cell| cell.is_alive()) {
            candidates.extend(cell.coordinate().neighbours(bounds));
        }
        candidates
    }

    /// Compute the next generation
    pub fn step(&self, universe: &Universe) -> Universe {
        let candidates = Self::candidates(universe);

        let evaluate = |coordinate: &Coordinate| -> Option<Cell> {
            let current = universe.get(coordinate);
            let status = current.map_or(Status::Dead, Cell::status);
            let alive_neighbours = universe.alive_neighbour_count(*coordinate);
            match (current, self.rules.next_status(status, alive_neighbours)) {
                (Some(cell), next) => Some(cell.with_status(next)),
                (None, Status::Alive) => Some(Cell::alive(*coordinate)),
                (None, Status::Dead) => None,
            }
        };

        let next_cells: Vec<Cell> = if candidates.len() >= self.parallel_threshold {
            candidates.par_iter().filter_map(&evaluate).collect()
        } else {
            candidates.iter().filter_map(&evaluate).collect()
        };

        Universe::from_unique_cells(universe.bounds(), next_cells)
    }

    /// Step `generations` times
    pub fn evolve_generations(&self, universe: &Universe, generations: usize) -> Universe {
        let mut current = universe.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }

    /// Endless iterator over the generations following `universe`
    pub fn generations(&self, universe: Universe) -> Generations<'_> {
        Generations {
            engine: self,
            current: universe,
        }
    }

    /// Step up to `limit` generations, stopping early on extinction, still
    /// lifes and period-2 oscillators when enabled
    pub fn run(&self, universe: &Universe, limit: usize) -> RunSummary {
        self.run_with(universe, limit, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` with generation 0 and each
    /// generation produced afterwards
    pub fn run_with<F>(&self, universe: &Universe, limit: usize, mut observer: F) -> RunSummary
    where
        F: FnMut(usize, &Universe),
    {
        let initial_population = universe.population();
        info!(
            "Running up to {} generations from {} alive cells",
            limit, initial_population
        );
        observer(0, universe);

        let finish = |generations: usize, termination: Termination, final_universe: Universe| {
            info!(
                "Stopped after {} generations: {} ({} alive)",
                generations,
                termination,
                final_universe.population()
            );
            RunSummary {
                generations,
                termination,
                initial_population,
                final_universe,
            }
        };

        if self.stop_when_stable && universe.is_extinct() {
            return finish(0, Termination::Extinct, universe.clone());
        }

        let mut previous: Option<Universe> = None;
        let mut current = universe.clone();

        for generation in 1..=limit {
            let next = self.step(&current);
            debug!("Generation {}: {} alive", generation, next.population());
            observer(generation, &next);

            if self.stop_when_stable {
                let termination = if next.is_extinct() {
                    Some(Termination::Extinct)
                } else if next.same_alive_cells(&current) {
                    Some(Termination::Stable)
                } else if previous.as_ref().is_some_and(|p| next.same_alive_cells(p)) {
                    Some(Termination::Oscillating { period: 2 })
                } else {
                    None
                };
                if let Some(termination) = termination {
                    return finish(generation, termination, next);
                }
            }

            previous = Some(std::mem::replace(&mut current, next));
        }

        finish(limit, Termination::Limit, current)
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new(RuleSet::conway())
    }
}

/// Iterator returned by [`GenerationEngine::generations`]
pub struct Generations<'a> {
    engine: &'a GenerationEngine,
    current: Universe,
}

impl Iterator for Generations<'_> {
    type Item = Universe;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.engine.step(&self.current);
        self.current = next.clone();
        Some(next)
    }
}
