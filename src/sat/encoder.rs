//! CNF encoder for Fix-a-Pix clue grids
//!
//! Each clue `k` over a neighborhood `N` says "exactly `k` of `N` are
//! painted". Trivial clues (`k = 0`, `k = |N|`) become unit clauses. Every
//! other clue gets one witness variable per `k`-subset of `N` (a selector):
//! the witness implies each literal of its selector, and one clause demands
//! that some witness holds. Two distinct `k`-subsets never match the same
//! painting, so the converse implications are left out.

use super::cnf::{Clause, Cnf, FrozenCnf};
use super::neighborhood::{clue_constraints, ClueConstraint};
use super::variables::VariableManager;
use crate::error::{FixAPixError, Result};
use crate::puzzle::ClueGrid;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What encoding a single clue produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClueEncoding {
    pub selectors: usize,
    pub clauses: usize,
}

/// Reject a clue that asks for more cells than its neighborhood has
fn check_constraint(constraint: &ClueConstraint) -> Result<()> {
    if constraint.count as usize > constraint.cells.len() {
        return Err(FixAPixError::InvalidClue {
            row: constraint.row,
            col: constraint.col,
            clue: constraint.count,
            neighborhood: constraint.cells.len(),
        });
    }
    Ok(())
}

/// Append clauses asserting that exactly `constraint.count` of its cells are painted
///
/// Selectors are visited in lexicographic order of their variable tuples.
/// Each implication clause lists the witness first, then one selector
/// literal: members in neighborhood order followed by non-members.
pub fn encode_exactly_k(
    constraint: &ClueConstraint,
    variables: &mut VariableManager,
    cnf: &mut Cnf,
) -> Result<ClueEncoding> {
    check_constraint(constraint)?;

    let cells = &constraint.cells;
    let k = constraint.count as usize;
    let before = cnf.size();

    if k == 0 {
        cells.iter().for_each(|&var| cnf.push(Clause::unit(-var)));
        return Ok(ClueEncoding {
            selectors: 0,
            clauses: cnf.size() - before,
        });
    }
    if k == cells.len() {
        cells.iter().for_each(|&var| cnf.push(Clause::unit(var)));
        return Ok(ClueEncoding {
            selectors: 0,
            clauses: cnf.size() - before,
        });
    }

    let mut witnesses = Vec::new();
    for members in (0..cells.len()).combinations(k) {
        let witness = variables.fresh()?;

        let positives = members.iter().map(|&idx| cells[idx]);
        let negatives = cells
            .iter()
            .enumerate()
            .filter(|(idx, _)| !members.contains(idx))
            .map(|(_, &var)| -var);

        for literal in positives.chain(negatives) {
            cnf.push(Clause::binary(-witness, literal));
        }
        witnesses.push(witness);
    }

    let selectors = witnesses.len();
    cnf.push(Clause::new(witnesses));

    Ok(ClueEncoding {
        selectors,
        clauses: cnf.size() - before,
    })
}

/// Result of encoding a whole puzzle
#[derive(Debug, Clone)]
pub struct PuzzleEncoding {
    pub cnf: FrozenCnf,
    pub variables: VariableManager,
    pub statistics: EncodingStatistics,
}

/// Encode every clue of `grid` into one frozen CNF
///
/// All clues are checked before any auxiliary is allocated.
pub fn encode_puzzle(grid: &ClueGrid) -> Result<PuzzleEncoding> {
    let mut variables = VariableManager::new(grid.width, grid.height)?;
    let constraints = clue_constraints(grid);
    constraints.iter().try_for_each(check_constraint)?;

    let mut cnf = Cnf::new();
    let mut trivial_clues = 0;
    let mut selectors = 0;

    for constraint in &constraints {
        let encoded = encode_exactly_k(constraint, &mut variables, &mut cnf)?;
        if constraint.is_trivial() {
            trivial_clues += 1;
        }
        selectors += encoded.selectors;
    }

    let cnf = cnf.freeze(variables.max_variable())?;
    let statistics = EncodingStatistics {
        grid_width: grid.width,
        grid_height: grid.height,
        clue_count: constraints.len(),
        trivial_clues,
        selectors,
        cell_variables: variables.cell_count(),
        auxiliary_variables: variables.auxiliary_count(),
        total_clauses: cnf.len(),
    };

    Ok(PuzzleEncoding {
        cnf,
        variables,
        statistics,
    })
}

/// Number of `k`-subsets of an `n`-set
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Predict encoding size without building it
pub fn estimate_complexity(grid: &ClueGrid) -> ComplexityEstimate {
    let mut estimated_auxiliaries = 0;
    let mut estimated_clauses = 0;
    let mut largest_clue_selectors = 0;

    for (row, col, k) in grid.clues() {
        let n = grid.neighborhood_size(row, col);
        let k = k as usize;
        if k == 0 || k >= n {
            estimated_clauses += n;
        } else {
            let selectors = binomial(n, k);
            estimated_auxiliaries += selectors;
            estimated_clauses += selectors * n + 1;
            largest_clue_selectors = largest_clue_selectors.max(selectors);
        }
    }

    let estimated_variables = grid.width * grid.height + estimated_auxiliaries;
    let complexity_level = if estimated_clauses < 10_000 {
        ComplexityLevel::Low
    } else if estimated_clauses < 100_000 {
        ComplexityLevel::Medium
    } else if estimated_clauses < 1_000_000 {
        ComplexityLevel::High
    } else {
        ComplexityLevel::VeryHigh
    };

    ComplexityEstimate {
        complexity_level,
        estimated_variables,
        estimated_clauses,
        largest_clue_selectors,
        clue_density: grid.clue_count() as f64 / (grid.width * grid.height) as f64,
        grid_size: grid.width * grid.height,
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingStatistics {
    pub grid_width: usize,
    pub grid_height: usize,
    pub clue_count: usize,
    pub trivial_clues: usize,
    pub selectors: usize,
    pub cell_variables: usize,
    pub auxiliary_variables: usize,
    pub total_clauses: usize,
}

impl EncodingStatistics {
    pub fn total_variables(&self) -> usize {
        self.cell_variables + self.auxiliary_variables
    }
}

/// Complexity estimate for the problem
#[derive(Debug, Clone)]
pub struct ComplexityEstimate {
    pub complexity_level: ComplexityLevel,
    pub estimated_variables: usize,
    pub estimated_clauses: usize,
    pub largest_clue_selectors: usize,
    pub clue_density: f64,
    pub grid_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Grid: {}x{}", self.grid_width, self.grid_height)?;
        writeln!(f, "  Clues: {} ({} trivial)", self.clue_count, self.trivial_clues)?;
        writeln!(f, "  Selectors: {}", self.selectors)?;
        writeln!(f, "  Cell variables: {}", self.cell_variables)?;
        writeln!(f, "  Auxiliary variables: {}", self.auxiliary_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        Ok(())
    }
}

impl std::fmt::Display for ComplexityEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem Complexity Estimate:")?;
        writeln!(f, "  Complexity level: {:?}", self.complexity_level)?;
        writeln!(f, "  Estimated variables: {}", self.estimated_variables)?;
        writeln!(f, "  Estimated clauses: {}", self.estimated_clauses)?;
        writeln!(f, "  Largest clue: {} selectors", self.largest_clue_selectors)?;
        writeln!(f, "  Grid size: {} cells", self.grid_size)?;
        writeln!(f, "  Clue density: {:.2}%", self.clue_density * 100.0)?;

        let recommendation = match self.complexity_level {
            ComplexityLevel::Low => "Should solve quickly",
            ComplexityLevel::Medium => "May take some time to solve",
            ComplexityLevel::High => "Large encoding, expect noticeable memory use",
            ComplexityLevel::VeryHigh => "Very large encoding, consider splitting the puzzle",
        };
        writeln!(f, "  Recommendation: {}", recommendation)?;

        Ok(())
    }
}
