//! Enumeration of clue neighborhoods as cell variables

use super::variables::cell_var;
use crate::puzzle::ClueGrid;

/// One clue together with the variables of its neighborhood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueConstraint {
    pub row: usize,
    pub col: usize,
    /// Required number of painted cells
    pub count: u8,
    /// Neighborhood cell variables in row-major order
    pub cells: Vec<i32>,
}

impl ClueConstraint {
    /// Whether the clue fixes every cell (`k = 0` or `k = n`)
    pub fn is_trivial(&self) -> bool {
        self.count == 0 || self.count as usize == self.cells.len()
    }
}

/// Every clue of the grid in row-major order; cells without a clue yield nothing
pub fn clue_constraints(grid: &ClueGrid) -> Vec<ClueConstraint> {
    grid.clues()
        .map(|(row, col, count)| ClueConstraint {
            row,
            col,
            count,
            cells: grid
                .neighborhood(row, col)
                .into_iter()
                .map(|(r, c)| cell_var(grid.width, r, c))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_row_major() {
        let grid = ClueGrid::from_values(vec![
            vec![-1, -1, 2],
            vec![-1, 1, -1],
            vec![-1, -1, -1],
        ])
        .unwrap();

        let constraints = clue_constraints(&grid);
        assert_eq!(constraints.len(), 2);

        assert_eq!((constraints[0].row, constraints[0].col, constraints[0].count), (0, 2, 2));
        assert_eq!(constraints[0].cells, vec![2, 3, 5, 6]);

        assert_eq!((constraints[1].row, constraints[1].col, constraints[1].count), (1, 1, 1));
        assert_eq!(constraints[1].cells, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_clues() {
        let grid = ClueGrid::from_values(vec![vec![-1; 3]; 2]).unwrap();
        assert!(clue_constraints(&grid).is_empty());
    }

    #[test]
    fn test_trivial_detection() {
        let grid = ClueGrid::from_values(vec![vec![0, -1], vec![-1, 4]]).unwrap();
        let constraints = clue_constraints(&grid);
        assert!(constraints.iter().all(ClueConstraint::is_trivial));

        let grid = ClueGrid::from_values(vec![vec![2, -1], vec![-1, -1]]).unwrap();
        assert!(!clue_constraints(&grid)[0].is_trivial());
    }
}
