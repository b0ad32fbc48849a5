//! Game of Life core functionality

pub mod cell;
pub mod coordinate;
pub mod engine;
pub mod io;
pub mod placement;
pub mod rules;
pub mod universe;

pub use cell::{Cell, CellSpec, Status};
pub use coordinate::{Bounds, Coordinate, DEFAULT_MAX_COORD};
pub use engine::{GenerationEngine, RunSummary, Termination};
pub use io::{create_example_patterns, load_universe_from_file, save_universe_to_file};
pub use placement::{CoordinateSource, RandomPlacement};
pub use rules::{Rule, RuleSet};
pub use universe::Universe;
