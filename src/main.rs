//! Command line driver for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_universe::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, Coordinate, Termination},
    simulate,
    utils::{ColorOutput, ReportFormatter},
};
use log::warn;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_universe")]
#[command(about = "Conway's Game of Life on a bounded universe")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the alive cells of each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Largest coordinate on both axes (overrides config)
        #[arg(short, long)]
        max_coord: Option<u32>,

        /// Pattern file with the initial cells (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of alive cells placed at random (overrides config)
        #[arg(short, long)]
        random: Option<usize>,

        /// Seed for random placement (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print the neighbour coordinates of a cell
    Neighbours {
        x: i64,
        y: i64,

        /// Largest coordinate on both axes
        #[arg(short, long, default_value_t = life_universe::game_of_life::DEFAULT_MAX_COORD)]
        max_coord: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            generations,
            max_coord,
            pattern,
            random,
            seed,
            format,
        } => {
            let overrides = CliOverrides {
                generations,
                max_coord,
                pattern_file: pattern,
                random_cells: random,
                seed,
                format,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Neighbours { x, y, max_coord } => neighbours_command(x, y, max_coord),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    let start_time = Instant::now();
    let (reports, summary) = simulate(&settings).context("Simulation failed")?;
    let elapsed = start_time.elapsed();

    println!("{}", ReportFormatter::format_reports(&reports, settings.output.format)?);

    if settings.output.format == OutputFormat::Text {
        println!();
        print!("{}", ReportFormatter::format_summary(&summary));
        if summary.termination == Termination::Extinct {
            println!("{}", ColorOutput::warning("No alive cells left"));
        }
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Finished {} generations in {:.3}s",
                summary.generations,
                elapsed.as_secs_f64()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Blinker configuration
    let mut blinker = Settings::default();
    blinker.simulation.generations = 4;
    blinker.simulation.stop_when_stable = false;
    blinker.input.pattern_file = Some(patterns_dir.join("blinker.txt"));
    blinker.to_file(config_dir.join("blinker.yaml"))?;

    // Random soup
    let mut soup = Settings::default();
    soup.simulation.generations = 100;
    soup.input.random_cells = 200;
    soup.input.seed = Some(42);
    soup.output.report_every = 10;
    soup.to_file(config_dir.join("soup.yaml"))?;

    println!("{}", ColorOutput::success("Setup complete!"));
    Ok(())
}

fn neighbours_command(x: i64, y: i64, max_coord: u32) -> Result<()> {
    let bounds = life_universe::game_of_life::Bounds::new(max_coord);
    let coordinate = Coordinate::new(x, y, bounds)?;
    let neighbours = coordinate.neighbours(bounds);
    println!(
        "{} has {} neighbours: {}",
        coordinate,
        neighbours.len(),
        ReportFormatter::format_coordinates(&neighbours)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_universe",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["life_universe", "neighbours", "3", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Neighbours { x: 3, y: 3, max_coord: 30 }));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let blinker = Settings::from_file(temp_dir.path().join("config/blinker.yaml")).unwrap();
        let (reports, summary) = simulate(&blinker).unwrap();
        assert_eq!(summary.generations, 4);
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].alive, reports[2].alive);
    }

    #[test]
    fn test_neighbours_command_rejects_out_of_bounds() {
        assert!(neighbours_command(3, 3, 30).is_ok());
        assert!(neighbours_command(31, 3, 30).is_err());
    }
}
