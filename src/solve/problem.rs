//! End-to-end Fix-a-Pix problem: load, encode, solve, decode, verify

use super::solution::Solution;
use super::validator::{SolutionValidator, ValidationResult};
use crate::config::{Settings, SolverBackend};
use crate::error::FixAPixError;
use crate::puzzle::{load_puzzle_from_file, ClueGrid, PaintedGrid};
use crate::sat::encoder::{estimate_complexity, ComplexityEstimate};
use crate::sat::{decode_model, encode_puzzle, solve_cnf, EncodingStatistics, PuzzleEncoding};
use anyhow::{Context, Result};
use std::time::Instant;

/// Solve a clue grid and return the painted grid
///
/// Fails with `InvalidClue` before any encoding work, `Unsatisfiable` when
/// no painting exists, or `SolverFailure` when the backend errors.
pub fn solve_grid(grid: &ClueGrid, backend: SolverBackend) -> crate::Result<PaintedGrid> {
    let encoding = encode_puzzle(grid)?;
    let (solution, _) = solve_cnf(&encoding.cnf, backend)?;
    let solution = solution.ok_or(FixAPixError::Unsatisfiable)?;
    Ok(decode_model(&solution.assignment, grid.width, grid.height))
}

/// A Fix-a-Pix puzzle bound to its run settings
pub struct FixAPixProblem {
    settings: Settings,
    puzzle: ClueGrid,
    validator: SolutionValidator,
}

impl FixAPixProblem {
    /// Create a problem from settings, loading the configured puzzle file
    pub fn new(settings: Settings) -> Result<Self> {
        let puzzle = load_puzzle_from_file(&settings.input.puzzle_file).with_context(|| {
            format!(
                "Failed to load puzzle: {}",
                settings.input.puzzle_file.display()
            )
        })?;

        Ok(Self::with_puzzle(settings, puzzle))
    }

    /// Create a problem around an already-parsed grid
    pub fn with_puzzle(settings: Settings, puzzle: ClueGrid) -> Self {
        Self {
            settings,
            puzzle,
            validator: SolutionValidator::new(),
        }
    }

    pub fn puzzle(&self) -> &ClueGrid {
        &self.puzzle
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Encode the puzzle without solving it
    pub fn encode(&self) -> Result<PuzzleEncoding> {
        Ok(encode_puzzle(&self.puzzle)?)
    }

    pub fn encoding_statistics(&self) -> Result<EncodingStatistics> {
        Ok(self.encode()?.statistics)
    }

    pub fn estimate_complexity(&self) -> ComplexityEstimate {
        estimate_complexity(&self.puzzle)
    }

    /// Check a painted grid against this puzzle's clues
    pub fn validate(&self, painted: &PaintedGrid) -> ValidationResult {
        self.validator.validate(&self.puzzle, painted)
    }

    /// Run the full pipeline
    pub fn solve(&self) -> Result<Solution> {
        let start = Instant::now();
        let backend = self.settings.solver.backend;

        let encoding = self.encode()?;

        if let Some(ref dimacs_path) = self.settings.output.dimacs_file {
            if let Some(parent) = dimacs_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(dimacs_path, encoding.cnf.to_dimacs())
                .with_context(|| format!("Failed to write DIMACS file: {}", dimacs_path.display()))?;
        }

        let (solution, _) = solve_cnf(&encoding.cnf, backend)?;
        let solution = solution.ok_or(FixAPixError::Unsatisfiable)?;
        let painted = decode_model(&solution.assignment, self.puzzle.width, self.puzzle.height);

        let verified = if self.settings.solver.verify_solution {
            let result = self.validate(&painted);
            if !result.is_valid {
                return Err(FixAPixError::SolverFailure(format!(
                    "decoded grid violates clues: {}",
                    result.error_message.unwrap_or_default()
                ))
                .into());
            }
            true
        } else {
            false
        };

        Ok(Solution::new(
            self.puzzle.clone(),
            painted,
            backend,
            &encoding.statistics,
            verified,
            start.elapsed(),
        ))
    }
}
