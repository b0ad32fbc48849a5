//! Pattern file I/O
//!
//! Patterns are plain text: each line is a row (`y`), each character a column
//! (`x`), `1` for an alive cell and `0` for an empty coordinate.

use super::{Bounds, Cell, Coordinate, Universe};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Load a universe from a pattern file
pub fn load_universe_from_file<P: AsRef<Path>>(path: P, bounds: Bounds) -> Result<Universe> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    let universe = parse_universe_from_string(&content, bounds)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))?;
    debug!(
        "Loaded {} alive cells from {}",
        universe.population(),
        path.as_ref().display()
    );
    Ok(universe)
}

/// Parse a universe from its pattern text
pub fn parse_universe_from_string(content: &str, bounds: Bounds) -> Result<Universe> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut universe = Universe::new(bounds);

    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                y,
                line.len(),
                width
            );
        }

        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    let coordinate = Coordinate::new(x as i64, y as i64, bounds)
                        .with_context(|| format!("Pattern does not fit in a universe of side {}", bounds.side()))?;
                    universe.add_cell(Cell::alive(coordinate))?;
                }
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    x,
                    y
                ),
            }
        }
    }

    Ok(universe)
}

/// Render the alive cells of a universe as pattern text.
///
/// The pattern spans from the origin to the furthest alive cell on each axis.
pub fn universe_to_string(universe: &Universe) -> String {
    let alive = universe.alive_coordinates();
    let width = alive.iter().map(|c| c.x() + 1).max().unwrap_or(1);
    let height = alive.iter().map(|c| c.y() + 1).max().unwrap_or(1);

    let mut result = String::with_capacity((height * (width + 1)) as usize);
    for y in 0..height {
        for x in 0..width {
            let is_alive = Coordinate::new(x, y, universe.bounds())
                .map(|c| universe.is_alive_at(&c))
                .unwrap_or(false);
            result.push(if is_alive { '1' } else { '0' });
        }
        result.push('\n');
    }
    result
}

/// Save the alive cells of a universe to a pattern file
pub fn save_universe_to_file<P: AsRef<Path>>(universe: &Universe, path: P) -> Result<()> {
    let content = universe_to_string(universe);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write a few well-known patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        // Glider (spaceship)
        ("glider.txt", "01000\n00100\n11100\n00000\n00000\n"),
        // Blinker (period 2 oscillator)
        ("blinker.txt", "00000\n00000\n00000\n01110\n00000\n"),
        // Block (still life)
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        // Beacon (period 2 oscillator)
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content).with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
