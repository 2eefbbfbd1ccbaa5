//! Solving pipeline: problem setup, solution records and verification

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{solve_grid, FixAPixProblem};
pub use solution::{Solution, SolutionMetadata, SolutionSummary};
pub use validator::{ClueViolation, SolutionValidator, ValidationResult};
