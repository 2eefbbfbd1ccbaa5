//! Fix-a-Pix SAT Solver
//!
//! Encodes Fix-a-Pix puzzles as CNF formulas, hands them to a SAT solver and
//! decodes the model back into a painted grid.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod sat;
pub mod solve;
pub mod utils;

pub use config::Settings;
pub use error::{FixAPixError, Result};
pub use puzzle::{ClueGrid, PaintedGrid};
pub use solve::{solve_grid, FixAPixProblem, Solution};

/// Main entry point for solving a Fix-a-Pix puzzle described by `settings`
pub fn solve_fix_a_pix(settings: Settings) -> anyhow::Result<Solution> {
    let problem = FixAPixProblem::new(settings)?;
    problem.solve()
}
