//! Factory for creating SAT solver instances based on configuration

use super::cnf::FrozenCnf;
use super::solver::{SatSolver, SolverSolution, SolverStatistics};
use super::splr_solver::SplrSatSolver;
use crate::config::SolverBackend;
use crate::error::Result;

/// Unified SAT solver interface that can use different backends
pub enum UnifiedSatSolver {
    Cadical(SatSolver),
    Splr(SplrSatSolver),
}

impl UnifiedSatSolver {
    /// Create a new solver instance based on the specified backend
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => UnifiedSatSolver::Cadical(SatSolver::new()),
            SolverBackend::Splr => UnifiedSatSolver::Splr(SplrSatSolver::new()),
        }
    }

    /// Load a frozen formula
    pub fn add_cnf(&mut self, cnf: &FrozenCnf) -> Result<()> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.add_cnf(cnf),
            UnifiedSatSolver::Splr(solver) => solver.add_cnf(cnf),
        }
    }

    /// Solve the SAT problem; `None` means unsatisfiable
    pub fn solve(&mut self) -> Result<Option<SolverSolution>> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.solve(),
            UnifiedSatSolver::Splr(solver) => solver.solve(),
        }
    }

    /// Get solver statistics
    pub fn statistics(&self) -> SolverStatistics {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.statistics(),
            UnifiedSatSolver::Splr(solver) => solver.statistics(),
        }
    }

    pub fn variable_count(&self) -> usize {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.variable_count(),
            UnifiedSatSolver::Splr(solver) => solver.variable_count(),
        }
    }

    pub fn clause_count(&self) -> usize {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.clause_count(),
            UnifiedSatSolver::Splr(solver) => solver.clause_count(),
        }
    }

    /// Get the backend type being used
    pub fn backend(&self) -> SolverBackend {
        match self {
            UnifiedSatSolver::Cadical(_) => SolverBackend::Cadical,
            UnifiedSatSolver::Splr(_) => SolverBackend::Splr,
        }
    }
}

/// Hand a frozen formula to a fresh solver of the given backend
///
/// Variable identifiers pass through unchanged. `None` means unsatisfiable.
pub fn solve_cnf(cnf: &FrozenCnf, backend: SolverBackend) -> Result<(Option<SolverSolution>, SolverStatistics)> {
    let mut solver = UnifiedSatSolver::new(backend);
    solver.add_cnf(cnf)?;
    let solution = solver.solve()?;
    Ok((solution, solver.statistics()))
}
