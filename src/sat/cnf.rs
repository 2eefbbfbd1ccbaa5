//! Clauses and the CNF assembler

use super::solver::Assignment;
use crate::error::{FixAPixError, Result};

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether some literal of the clause is true under `assignment`
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.literals
            .iter()
            .any(|&lit| assignment.value(lit.abs()) == Some(lit > 0))
    }
}

/// Growing conjunction of clauses
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Number of clauses pushed so far
    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Close the formula over variables `1..=max_variable`
    ///
    /// Fails on an empty clause, a zero literal, or a literal naming a
    /// variable above `max_variable`.
    pub fn freeze(self, max_variable: i32) -> Result<FrozenCnf> {
        for (index, clause) in self.clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(FixAPixError::EmptyClause { index });
            }
            if let Some(&literal) = clause
                .literals
                .iter()
                .find(|lit| **lit == 0 || lit.abs() > max_variable)
            {
                return Err(FixAPixError::InvalidLiteral {
                    literal,
                    max_variable,
                });
            }
        }

        Ok(FrozenCnf {
            clauses: self.clauses,
            variable_count: max_variable.max(0) as usize,
        })
    }
}

impl Extend<Clause> for Cnf {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        self.clauses.extend(iter);
    }
}

/// Read-only formula handed to a solver backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenCnf {
    clauses: Vec<Clause>,
    variable_count: usize,
}

impl FrozenCnf {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of variables the formula ranges over
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Clauses as plain integer vectors
    pub fn to_int_vecs(&self) -> Vec<Vec<i32>> {
        self.clauses.iter().map(|clause| clause.literals.clone()).collect()
    }

    /// Whether every clause holds under `assignment`
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied_by(assignment))
    }

    /// Render in DIMACS CNF format
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.variable_count, self.clauses.len());
        for clause in &self.clauses {
            for literal in &clause.literals {
                out.push_str(&format!("{} ", literal));
            }
            out.push_str("0\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_constructors() {
        assert!(Clause::unit(3).is_unit());
        assert_eq!(Clause::binary(-1, 2).literals, vec![-1, 2]);
        assert!(Clause::new(vec![]).is_empty());
        assert_eq!(Clause::new(vec![1, 2, 3]).len(), 3);
    }

    #[test]
    fn test_push_and_size() {
        let mut cnf = Cnf::new();
        assert!(cnf.is_empty());
        cnf.push(Clause::unit(1));
        cnf.extend(vec![Clause::binary(-1, 2), Clause::unit(-2)]);
        assert_eq!(cnf.size(), 3);
    }

    #[test]
    fn test_freeze_checks_literals() {
        let mut cnf = Cnf::new();
        cnf.push(Clause::binary(1, -3));
        let frozen = cnf.clone().freeze(3).unwrap();
        assert_eq!(frozen.len(), 1);
        assert_eq!(frozen.variable_count(), 3);

        assert_eq!(
            cnf.clone().freeze(2).unwrap_err(),
            FixAPixError::InvalidLiteral { literal: -3, max_variable: 2 }
        );

        let mut zero = Cnf::new();
        zero.push(Clause::new(vec![1, 0]));
        assert!(matches!(zero.freeze(4), Err(FixAPixError::InvalidLiteral { literal: 0, .. })));

        let mut empty = Cnf::new();
        empty.push(Clause::unit(1));
        empty.push(Clause::new(vec![]));
        assert_eq!(empty.freeze(1).unwrap_err(), FixAPixError::EmptyClause { index: 1 });
    }

    #[test]
    fn test_dimacs_output() {
        let mut cnf = Cnf::new();
        cnf.push(Clause::binary(1, -2));
        cnf.push(Clause::unit(2));
        let frozen = cnf.freeze(2).unwrap();

        assert_eq!(frozen.to_dimacs(), "p cnf 2 2\n1 -2 0\n2 0\n");
        assert_eq!(frozen.to_int_vecs(), vec![vec![1, -2], vec![2]]);

        let empty = Cnf::new().freeze(3).unwrap();
        assert_eq!(empty.to_dimacs(), "p cnf 3 0\n");
    }

    #[test]
    fn test_satisfaction_check() {
        let mut cnf = Cnf::new();
        cnf.push(Clause::binary(1, 2));
        cnf.push(Clause::unit(-1));
        let frozen = cnf.freeze(2).unwrap();

        assert!(frozen.is_satisfied_by(&Assignment::from_values(vec![false, true])));
        assert!(!frozen.is_satisfied_by(&Assignment::from_values(vec![true, true])));
        assert!(!frozen.is_satisfied_by(&Assignment::from_values(vec![false, false])));
    }
}
