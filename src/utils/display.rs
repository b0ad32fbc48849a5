//! Report formatting and output utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Coordinate, RunSummary, Universe};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

/// Alive cells of one generation, as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub population: usize,
    pub alive: Vec<Coordinate>,
}

impl GenerationReport {
    pub fn new(generation: usize, universe: &Universe) -> Self {
        let alive = universe.alive_coordinates();
        Self {
            generation,
            population: alive.len(),
            alive,
        }
    }
}

/// Format reports and run summaries for console output
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per generation: `Generation 3 (5 alive): (1, 2) (2, 2) ...`
    pub fn format_report(report: &GenerationReport) -> String {
        format!(
            "Generation {} ({} alive): {}",
            report.generation,
            report.population,
            Self::format_coordinates(&report.alive)
        )
    }

    pub fn format_coordinates(coordinates: &[Coordinate]) -> String {
        if coordinates.is_empty() {
            return "-".to_string();
        }
        coordinates.iter().join(" ")
    }

    /// Render every report in the requested format
    pub fn format_reports(reports: &[GenerationReport], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(reports.iter().map(Self::format_report).join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(reports).context("Failed to serialize reports"),
        }
    }

    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str("Run Summary:\n");
        output.push_str(&format!("  Generations: {}\n", summary.generations));
        output.push_str(&format!("  Outcome: {}\n", summary.termination));
        output.push_str(&format!(
            "  Living Cells: {} → {}\n",
            summary.initial_population,
            summary.final_population()
        ));
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_universe_from_string;
    use crate::game_of_life::{Bounds, GenerationEngine};

    fn blinker() -> Universe {
        parse_universe_from_string("000\n111\n", Bounds::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let report = GenerationReport::new(4, &blinker());
        assert_eq!(report.population, 3);
        assert_eq!(
            ReportFormatter::format_report(&report),
            "Generation 4 (3 alive): (0, 1) (1, 1) (2, 1)"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = GenerationReport::new(0, &Universe::new(Bounds::default()));
        assert_eq!(ReportFormatter::format_report(&report), "Generation 0 (0 alive): -");
    }

    #[test]
    fn test_json_reports() {
        let reports = vec![GenerationReport::new(0, &blinker())];
        let json = ReportFormatter::format_reports(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["generation"], 0);
        assert_eq!(value[0]["population"], 3);
        assert_eq!(value[0]["alive"][2]["x"], 2);
        assert_eq!(value[0]["alive"][2]["y"], 1);
    }

    #[test]
    fn test_summary_format() {
        let summary = GenerationEngine::default().run(&blinker(), 10);
        let text = ReportFormatter::format_summary(&summary);
        assert!(text.contains("Generations: 2"));
        assert!(text.contains("oscillator (period 2)"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Yellow);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
        assert!(ColorOutput::warning("died out").contains("died out"));
    }
}
