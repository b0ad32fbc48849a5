//! Conway's Game of Life on a bounded, sparse universe
//!
//! The core lives in [`game_of_life`]: coordinates, cells, the universe and the
//! generation engine. [`config`] and [`utils`] support the command line driver.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Cell, Coordinate, GenerationEngine, Universe};

use anyhow::{Context, Result};
use game_of_life::{load_universe_from_file, CoordinateSource, RandomPlacement, RuleSet, RunSummary};
use log::info;
use utils::GenerationReport;

/// Build the initial universe described by `settings`.
///
/// The pattern file is loaded first, then explicit cells are added in order,
/// then random cells fill free coordinates.
pub fn build_universe<S>(settings: &Settings, source: &mut S) -> Result<Universe>
where
    S: CoordinateSource + ?Sized,
{
    let bounds = settings.universe.bounds();
    let mut universe = match settings.input.pattern_file {
        Some(ref path) => load_universe_from_file(path, bounds)?,
        None => Universe::new(bounds),
    };

    for (i, spec) in settings.input.cells.iter().enumerate() {
        let cell = spec
            .resolve(bounds, source)
            .with_context(|| format!("Invalid cell #{} in configuration", i + 1))?;
        universe
            .add_cell(cell)
            .with_context(|| format!("Cannot place cell #{} from configuration", i + 1))?;
    }

    if settings.input.random_cells > 0 {
        universe
            .populate_random(settings.input.random_cells, source)
            .context("Failed to seed random cells")?;
    }

    info!(
        "Initial universe: {} cells stored, {} alive, side {}",
        universe.len(),
        universe.population(),
        bounds.side()
    );
    Ok(universe)
}

/// Engine configured from `settings`
pub fn engine_from_settings(settings: &Settings) -> GenerationEngine {
    GenerationEngine::new(RuleSet::conway())
        .with_parallel_threshold(settings.simulation.parallel_threshold)
        .with_stop_when_stable(settings.simulation.stop_when_stable)
}

/// Main entry point: build the universe, run it and collect the reports
pub fn simulate(settings: &Settings) -> Result<(Vec<GenerationReport>, RunSummary)> {
    let mut placement = RandomPlacement::from_seed(settings.input.seed);
    let universe = build_universe(settings, &mut placement)?;
    let engine = engine_from_settings(settings);

    let report_every = settings.output.report_every.max(1);
    let mut reports = Vec::new();
    let summary = engine.run_with(&universe, settings.simulation.generations, |generation, current| {
        if generation % report_every == 0 {
            reports.push(GenerationReport::new(generation, current));
        }
    });

    // Always report the last generation
    if reports.last().map(|r| r.generation) != Some(summary.generations) {
        reports.push(GenerationReport::new(summary.generations, &summary.final_universe));
    }

    Ok((reports, summary))
}
