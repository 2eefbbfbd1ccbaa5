//! SAT solver integration using CaDiCaL

use super::cnf::{Clause, FrozenCnf};
use crate::error::{FixAPixError, Result};
use cadical::Solver;
use std::time::{Duration, Instant};

/// Total truth assignment; index `v - 1` holds variable `v`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn from_values(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Build from a model given as signed literals, padding unmentioned
    /// variables up to `variable_count` with `false`
    pub fn from_model(literals: &[i32], variable_count: usize) -> Self {
        let size = literals
            .iter()
            .map(|lit| lit.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
            .max(variable_count);
        let mut values = vec![false; size];
        for &lit in literals.iter().filter(|lit| **lit != 0) {
            values[lit.unsigned_abs() as usize - 1] = lit > 0;
        }
        Self { values }
    }

    /// Value of variable `var`, `None` outside `1..=len`
    pub fn value(&self, var: i32) -> Option<bool> {
        if var < 1 {
            return None;
        }
        self.values.get(var as usize - 1).copied()
    }

    /// Number of variables covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of SAT solving
#[derive(Debug, Clone)]
pub struct SolverSolution {
    pub assignment: Assignment,
    pub solve_time: Duration,
}

/// Statistics about the solving process
#[derive(Debug, Clone)]
pub struct SolverStatistics {
    pub variable_count: usize,
    pub clause_count: usize,
    pub solve_time: Duration,
    pub result: SolverResultType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResultType {
    NotSolved,
    Satisfiable,
    Unsatisfiable,
    Error,
}

/// SAT solver wrapper for CaDiCaL
pub struct SatSolver {
    solver: Solver,
    variable_count: usize,
    /// Highest variable actually passed to CaDiCaL
    max_literal_var: usize,
    clause_count: usize,
    last_solve_time: Duration,
    last_result: SolverResultType,
}

impl SatSolver {
    /// Create a new SAT solver instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            max_literal_var: 0,
            clause_count: 0,
            last_solve_time: Duration::ZERO,
            last_result: SolverResultType::NotSolved,
        }
    }

    /// Load a frozen formula; the model will cover all of its variables
    pub fn add_cnf(&mut self, cnf: &FrozenCnf) -> Result<()> {
        self.add_clauses(cnf.clauses())?;
        self.variable_count = self.variable_count.max(cnf.variable_count());
        Ok(())
    }

    /// Add clauses to the solver
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Add a single clause to the solver
    pub fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        if clause.is_empty() {
            return Err(FixAPixError::EmptyClause {
                index: self.clause_count,
            });
        }

        for &literal in &clause.literals {
            if literal == 0 {
                return Err(FixAPixError::InvalidLiteral {
                    literal,
                    max_variable: self.variable_count as i32,
                });
            }
            let var = literal.unsigned_abs() as usize;
            self.max_literal_var = self.max_literal_var.max(var);
            self.variable_count = self.variable_count.max(var);
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
        Ok(())
    }

    /// Solve; `None` means unsatisfiable
    pub fn solve(&mut self) -> Result<Option<SolverSolution>> {
        let start_time = Instant::now();
        let result = self.solver.solve();
        self.last_solve_time = start_time.elapsed();

        match result {
            Some(true) => {
                self.last_result = SolverResultType::Satisfiable;
                Ok(Some(SolverSolution {
                    assignment: self.extract_assignment(),
                    solve_time: self.last_solve_time,
                }))
            }
            Some(false) => {
                self.last_result = SolverResultType::Unsatisfiable;
                Ok(None)
            }
            None => {
                self.last_result = SolverResultType::Error;
                Err(FixAPixError::SolverFailure(
                    "CaDiCaL stopped without a result".to_string(),
                ))
            }
        }
    }

    /// Extract variable assignment from the solver
    fn extract_assignment(&self) -> Assignment {
        let mut values = vec![false; self.variable_count];
        for var in 1..=self.max_literal_var {
            values[var - 1] = self.solver.value(var as i32).unwrap_or(false);
        }
        Assignment::from_values(values)
    }

    /// Get solver statistics
    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            variable_count: self.variable_count,
            clause_count: self.clause_count,
            solve_time: self.last_solve_time,
            result: self.last_result.clone(),
        }
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl Default for SatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Solver Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Clauses: {}", self.clause_count)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Result: {:?}", self.result)?;
        Ok(())
    }
}

impl std::fmt::Display for SolverSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Solution:")?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Variables assigned: {}", self.assignment.len())?;

        write!(f, "  Sample assignments: ")?;
        for var in 1..=self.assignment.len().min(10) {
            if var > 1 {
                write!(f, ", ")?;
            }
            let value = self.assignment.value(var as i32).unwrap_or(false);
            write!(f, "{}={}", var, if value { "T" } else { "F" })?;
        }
        if self.assignment.len() > 10 {
            write!(f, ", ...")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::cnf::Cnf;

    #[test]
    fn test_solver_creation() {
        let solver = SatSolver::new();
        assert_eq!(solver.variable_count(), 0);
        assert_eq!(solver.clause_count(), 0);
        assert_eq!(solver.statistics().result, SolverResultType::NotSolved);
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = SatSolver::new();

        // x1 ∨ x2, ¬x1 ∨ x2
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();
        solver.add_clause(&Clause::new(vec![-1, 2])).unwrap();

        let solution = solver.solve().unwrap().unwrap();
        assert_eq!(solution.assignment.value(2), Some(true));
        assert_eq!(solver.statistics().result, SolverResultType::Satisfiable);
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = SatSolver::new();

        solver.add_clause(&Clause::unit(1)).unwrap();
        solver.add_clause(&Clause::unit(-1)).unwrap();

        assert!(solver.solve().unwrap().is_none());
        assert_eq!(solver.statistics().result, SolverResultType::Unsatisfiable);
    }

    #[test]
    fn test_assignment_covers_unused_variables() {
        let mut cnf = Cnf::new();
        cnf.push(Clause::unit(2));
        let frozen = cnf.freeze(5).unwrap();

        let mut solver = SatSolver::new();
        solver.add_cnf(&frozen).unwrap();
        let solution = solver.solve().unwrap().unwrap();

        assert_eq!(solution.assignment.len(), 5);
        assert_eq!(solution.assignment.value(2), Some(true));
        assert_eq!(solution.assignment.value(5), Some(false));
        assert_eq!(solution.assignment.value(6), None);
    }

    #[test]
    fn test_empty_clause_error() {
        let mut solver = SatSolver::new();
        assert!(solver.add_clause(&Clause::new(vec![])).is_err());
        assert!(solver.add_clause(&Clause::new(vec![1, 0])).is_err());
    }

    #[test]
    fn test_variable_count_tracking() {
        let mut solver = SatSolver::new();

        solver.add_clause(&Clause::new(vec![1, -5, 3])).unwrap();
        assert_eq!(solver.variable_count(), 5);

        solver.add_clause(&Clause::new(vec![2, -7])).unwrap();
        assert_eq!(solver.variable_count(), 7);
        assert_eq!(solver.clause_count(), 2);
    }

    #[test]
    fn test_assignment_from_model() {
        let assignment = Assignment::from_model(&[1, -2, 3], 5);
        assert_eq!(assignment.len(), 5);
        assert_eq!(assignment.value(1), Some(true));
        assert_eq!(assignment.value(2), Some(false));
        assert_eq!(assignment.value(3), Some(true));
        assert_eq!(assignment.value(0), None);
        assert_eq!(assignment.value(4), Some(false));
    }
}
