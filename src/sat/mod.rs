//! SAT encoding and solving for Fix-a-Pix

pub mod cnf;
pub mod decoder;
pub mod encoder;
pub mod neighborhood;
pub mod solver;
pub mod solver_factory;
pub mod splr_solver;
pub mod variables;

pub use cnf::{Clause, Cnf, FrozenCnf};
pub use decoder::decode_model;
pub use encoder::{
    encode_exactly_k, encode_puzzle, estimate_complexity, ComplexityEstimate, ComplexityLevel,
    EncodingStatistics, PuzzleEncoding,
};
pub use neighborhood::{clue_constraints, ClueConstraint};
pub use solver::{Assignment, SatSolver, SolverSolution, SolverStatistics};
pub use solver_factory::{solve_cnf, UnifiedSatSolver};
pub use splr_solver::SplrSatSolver;
pub use variables::VariableManager;
