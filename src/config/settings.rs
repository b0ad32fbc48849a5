//! Configuration settings for the Game of Life simulator

use crate::game_of_life::engine::DEFAULT_PARALLEL_THRESHOLD;
use crate::game_of_life::{Bounds, CellSpec, DEFAULT_MAX_COORD};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub universe: UniverseConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Largest coordinate on both axes
    pub max_coord: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    /// Stop early once the universe dies out, freezes or blinks
    pub stop_when_stable: bool,
    /// Candidate count from which a step runs on the rayon pool
    pub parallel_threshold: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub pattern_file: Option<PathBuf>,
    pub cells: Vec<CellSpec>,
    pub random_cells: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Emit a report every N generations
    pub report_every: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            max_coord: DEFAULT_MAX_COORD,
        }
    }
}

impl UniverseConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.max_coord)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            stop_when_stable: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            report_every: 1,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.universe.max_coord == 0 {
            anyhow::bail!("max_coord must be at least 1");
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.output.report_every == 0 {
            anyhow::bail!("report_every must be positive");
        }

        let capacity = self.universe.bounds().capacity().with_context(|| {
            format!(
                "max_coord {} is too large, the universe would not fit in memory",
                self.universe.max_coord
            )
        })?;
        let requested = self.input.random_cells.saturating_add(self.input.cells.len());
        if requested > capacity {
            anyhow::bail!(
                "{} cells requested but the universe only has {} coordinates",
                requested,
                capacity
            );
        }

        if let Some(ref pattern_file) = self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(max_coord) = cli_overrides.max_coord {
            self.universe.max_coord = max_coord;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(random_cells) = cli_overrides.random_cells {
            self.input.random_cells = random_cells;
        }
        if let Some(seed) = cli_overrides.seed {
            self.input.seed = Some(seed);
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub max_coord: Option<u32>,
    pub pattern_file: Option<PathBuf>,
    pub random_cells: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Status;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.universe.max_coord, 30);
        assert_eq!(settings.universe.bounds().side(), 31);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/life.yaml");

        let mut settings = Settings::default();
        settings.simulation.generations = 42;
        settings.input.cells = vec![CellSpec::at(1, 2, Status::Alive), CellSpec::unplaced(Status::Dead)];
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str(
            "universe:\n  max_coord: 10\ninput:\n  random_cells: 4\n",
        )
        .unwrap();
        assert_eq!(settings.universe.max_coord, 10);
        assert_eq!(settings.input.random_cells, 4);
        assert_eq!(settings.simulation, SimulationConfig::default());
        assert_eq!(settings.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.universe.max_coord = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.universe.max_coord = 2;
        settings.input.random_cells = 10;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.pattern_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.random_cells = usize::MAX;
        settings.input.cells = vec![CellSpec::unplaced(Status::Alive)];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_of_largest_max_coord() {
        let mut settings = Settings::default();
        settings.universe.max_coord = u32::MAX;
        if usize::BITS <= 64 {
            let err = settings.validate().unwrap_err();
            assert!(err.to_string().contains("too large"));
        }

        settings.universe.max_coord = 1000;
        settings.input.random_cells = 500;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            generations: Some(7),
            max_coord: Some(15),
            random_cells: Some(20),
            seed: Some(3),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.generations, 7);
        assert_eq!(settings.universe.max_coord, 15);
        assert_eq!(settings.input.random_cells, 20);
        assert_eq!(settings.input.seed, Some(3));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.input.pattern_file, None);
    }
}
