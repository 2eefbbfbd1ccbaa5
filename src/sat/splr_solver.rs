//! Splr (pure Rust CDCL) integration

use super::cnf::{Clause, FrozenCnf};
use super::solver::{Assignment, SolverResultType, SolverSolution, SolverStatistics};
use crate::error::{FixAPixError, Result};
use splr::Certificate;
use std::time::{Duration, Instant};

/// SAT solver wrapper for Splr
///
/// Splr takes the whole formula at once, so clauses are buffered until
/// [`SplrSatSolver::solve`] is called.
#[derive(Debug, Default)]
pub struct SplrSatSolver {
    clauses: Vec<Vec<i32>>,
    variable_count: usize,
    last_solve_time: Duration,
    last_result: Option<SolverResultType>,
}

impl SplrSatSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a frozen formula; the model will cover all of its variables
    pub fn add_cnf(&mut self, cnf: &FrozenCnf) -> Result<()> {
        self.add_clauses(cnf.clauses())?;
        self.variable_count = self.variable_count.max(cnf.variable_count());
        Ok(())
    }

    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    pub fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        if clause.is_empty() {
            return Err(FixAPixError::EmptyClause {
                index: self.clauses.len(),
            });
        }
        for &literal in &clause.literals {
            if literal == 0 {
                return Err(FixAPixError::InvalidLiteral {
                    literal,
                    max_variable: self.variable_count as i32,
                });
            }
            self.variable_count = self.variable_count.max(literal.unsigned_abs() as usize);
        }
        self.clauses.push(clause.literals.clone());
        Ok(())
    }

    /// Solve; `None` means unsatisfiable
    pub fn solve(&mut self) -> Result<Option<SolverSolution>> {
        let start_time = Instant::now();

        // nothing to search
        if self.clauses.is_empty() {
            self.last_solve_time = start_time.elapsed();
            self.last_result = Some(SolverResultType::Satisfiable);
            return Ok(Some(SolverSolution {
                assignment: Assignment::from_values(vec![false; self.variable_count]),
                solve_time: self.last_solve_time,
            }));
        }

        let result = Certificate::try_from(self.clauses.clone());
        self.last_solve_time = start_time.elapsed();

        match result {
            Ok(Certificate::SAT(model)) => {
                self.last_result = Some(SolverResultType::Satisfiable);
                Ok(Some(SolverSolution {
                    assignment: Assignment::from_model(&model, self.variable_count),
                    solve_time: self.last_solve_time,
                }))
            }
            Ok(Certificate::UNSAT) => {
                self.last_result = Some(SolverResultType::Unsatisfiable);
                Ok(None)
            }
            Err(err) => {
                self.last_result = Some(SolverResultType::Error);
                Err(FixAPixError::SolverFailure(format!("splr: {:?}", err)))
            }
        }
    }

    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            variable_count: self.variable_count,
            clause_count: self.clauses.len(),
            solve_time: self.last_solve_time,
            result: self.last_result.clone().unwrap_or(SolverResultType::NotSolved),
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
