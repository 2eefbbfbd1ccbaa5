//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::puzzle::{painted_to_string, ClueGrid, PaintedGrid};
use crate::solve::{Solution, ValidationResult};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a solution for console output
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", solution.metadata.id));
        output.push_str(&format!(
            "Grid: {}x{} ({} clues)\n",
            solution.painted.height, solution.painted.width, solution.metadata.clue_count
        ));
        output.push_str(&format!("Backend: {:?}\n", solution.metadata.backend));
        output.push_str(&format!("Solve Time: {:.3}s\n", solution.solve_time.as_secs_f64()));
        output.push_str(&format!(
            "Painted Cells: {} ({:.1}%)\n",
            solution.metadata.painted_cells,
            solution.metadata.painted_density * 100.0
        ));
        output.push_str(&format!(
            "Encoding: {} variables ({} auxiliary), {} clauses\n",
            solution.metadata.encoding.total_variables(),
            solution.metadata.encoding.auxiliary_variables,
            solution.metadata.encoding.total_clauses
        ));
        if !solution.metadata.verified {
            output.push_str("Verification: skipped\n");
        }

        output.push('\n');
        output.push_str(&Self::format_grid_compact(&solution.painted));
        output
    }

    /// Format a painted grid in compact form
    pub fn format_grid_compact(grid: &PaintedGrid) -> String {
        let mut output = String::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a painted grid with coordinates, overlaying clue digits when given
    pub fn format_grid_with_coords(grid: &PaintedGrid, clues: Option<&ClueGrid>) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.height {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.width {
                let painted = grid.get(row, col);
                match clues.and_then(|c| c.clue(row, col)) {
                    Some(k) if painted => output.push_str(&format!("█{}", k)),
                    Some(k) => output.push_str(&format!("·{}", k)),
                    None if painted => output.push_str("██"),
                    None => output.push_str("··"),
                }
            }
            output.push('\n');
        }

        output
    }

    /// Format a clue grid for console output
    pub fn format_puzzle(puzzle: &ClueGrid) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Puzzle: {}x{} ({} clues)\n",
            puzzle.height,
            puzzle.width,
            puzzle.clue_count()
        ));
        output.push_str(&puzzle.to_string());
        output
    }

    /// Format a validation report
    pub fn format_validation(result: &ValidationResult) -> String {
        let mut output = format!(
            "Checked {} clue(s), {} violation(s)\n",
            result.clues_checked,
            result.violations.len()
        );
        for violation in &result.violations {
            output.push_str(&format!("  - {}\n", violation));
        }
        if let Some(ref message) = result.error_message {
            if result.violations.is_empty() {
                output.push_str(&format!("  {}\n", message));
            }
        }
        output
    }

    /// Save a solution to `output_dir` in the given format, returning the main file written
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        name: &str,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let filepath = match format {
            OutputFormat::Text => {
                let filepath = output_dir.join(format!("{}_solution.txt", name));
                std::fs::write(&filepath, painted_to_string(&solution.painted))?;
                filepath
            }
            OutputFormat::Json => {
                let filepath = output_dir.join(format!("{}_solution.json", name));
                solution.save_to_file(&filepath)?;

                let summary_path = output_dir.join(format!("{}_summary.json", name));
                let summary_json = serde_json::to_string_pretty(&solution.summary())?;
                std::fs::write(summary_path, summary_json)?;
                filepath
            }
            OutputFormat::Visual => {
                let filepath = output_dir.join(format!("{}_visual.txt", name));
                std::fs::write(&filepath, Self::create_visual(solution))?;
                filepath
            }
        };

        Ok(filepath)
    }

    fn create_visual(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&format!("Fix-a-Pix Solution {}\n", solution.metadata.id));
        output.push_str(&"=".repeat(50));
        output.push_str("\n\nClues:\n");
        output.push_str(&solution.puzzle.to_string());
        output.push_str("\nPainted:\n");
        output.push_str(&Self::format_grid_with_coords(&solution.painted, Some(&solution.puzzle)));

        output.push_str("\nSolution Statistics:\n");
        output.push_str(&format!("Painted Cells: {}\n", solution.metadata.painted_cells));
        output.push_str(&format!("Clauses: {}\n", solution.metadata.encoding.total_clauses));
        output.push_str(&format!("Solve Time: {:.3}s\n", solution.solve_time.as_secs_f64()));
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
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Format secondary detail such as statistics
    pub fn detail(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}
