//! Independent check of a painted grid against its clues

use crate::puzzle::{ClueGrid, PaintedGrid};
use rayon::prelude::*;

/// Recounts every clue neighborhood on a painted grid
#[derive(Debug, Default, Clone, Copy)]
pub struct SolutionValidator;

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub clues_checked: usize,
    pub violations: Vec<ClueViolation>,
    pub error_message: Option<String>,
}

/// A clue whose neighborhood holds the wrong number of painted cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueViolation {
    pub row: usize,
    pub col: usize,
    pub expected: u8,
    pub actual: usize,
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check that `painted` satisfies every clue of `puzzle`
    pub fn validate(&self, puzzle: &ClueGrid, painted: &PaintedGrid) -> ValidationResult {
        if puzzle.width != painted.width || puzzle.height != painted.height {
            return ValidationResult {
                is_valid: false,
                clues_checked: 0,
                violations: Vec::new(),
                error_message: Some(format!(
                    "Grid dimension mismatch: puzzle {}x{}, solution {}x{}",
                    puzzle.height, puzzle.width, painted.height, painted.width
                )),
            };
        }

        let violations: Vec<ClueViolation> = (0..puzzle.height)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..puzzle.width).filter_map(move |col| {
                    let expected = puzzle.clue(row, col)?;
                    let actual = painted.count_painted(&puzzle.neighborhood(row, col));
                    (actual != expected as usize).then_some(ClueViolation {
                        row,
                        col,
                        expected,
                        actual,
                    })
                })
            })
            .collect();

        let is_valid = violations.is_empty();
        let error_message = (!is_valid).then(|| Self::describe(&violations));

        ValidationResult {
            is_valid,
            clues_checked: puzzle.clue_count(),
            violations,
            error_message,
        }
    }

    fn describe(violations: &[ClueViolation]) -> String {
        let mut message = format!("Found {} violated clue(s). ", violations.len());
        for (i, violation) in violations.iter().take(3).enumerate() {
            if i == 0 {
                message.push_str("Examples: ");
            }
            message.push_str(&format!("{}; ", violation));
        }
        if violations.len() > 3 {
            message.push_str(&format!("... and {} more", violations.len() - 3));
        }
        message
    }
}

impl std::fmt::Display for ClueViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "clue {} at ({}, {}) sees {} painted cell(s)",
            self.expected, self.row, self.col, self.actual
        )
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Validation Result:")?;
        writeln!(f, "  Valid: {}", self.is_valid)?;
        writeln!(f, "  Clues checked: {}", self.clues_checked)?;
        writeln!(f, "  Violations: {}", self.violations.len())?;
        if let Some(ref message) = self.error_message {
            writeln!(f, "  Error: {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_counts() {
        let puzzle = ClueGrid::from_values(vec![vec![1, -1], vec![-1, 2]]).unwrap();
        let painted = PaintedGrid::from_cells(vec![vec![true, false], vec![false, false]]).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(!result.is_valid);

        let painted = PaintedGrid::from_cells(vec![vec![false, false], vec![false, true]]).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(!result.is_valid);
        assert_eq!(
            result.violations,
            vec![ClueViolation { row: 1, col: 1, expected: 2, actual: 1 }]
        );

        let painted = PaintedGrid::from_cells(vec![vec![true, false], vec![false, true]]).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(!result.is_valid);

        let painted = PaintedGrid::from_cells(vec![vec![false, true], vec![true, false]]).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(!result.is_valid);

        let puzzle = ClueGrid::from_values(vec![vec![2, -1], vec![-1, 2]]).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(result.is_valid);
        assert_eq!(result.clues_checked, 2);
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_violations_in_row_major_order() {
        let puzzle = ClueGrid::from_values(vec![vec![0, -1, 0], vec![-1, -1, -1], vec![0, -1, 0]]).unwrap();
        let mut painted = PaintedGrid::new(3, 3);
        painted.set(1, 1, true).unwrap();

        let result = SolutionValidator::new().validate(&puzzle, &painted);
        let positions: Vec<_> = result.violations.iter().map(|v| (v.row, v.col)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert!(result.error_message.unwrap().contains("... and 1 more"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let puzzle = ClueGrid::from_values(vec![vec![0]]).unwrap();
        let painted = PaintedGrid::new(2, 2);
        let result = SolutionValidator::new().validate(&puzzle, &painted);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("mismatch"));
    }
}
