//! Projection of a solver model back onto the grid

use super::solver::Assignment;
use super::variables::cell_var;
use crate::puzzle::PaintedGrid;

/// Painted grid where cell `(row, col)` is painted iff its variable is true
///
/// Auxiliary values are ignored. Cell variables missing from the assignment
/// are left blank.
pub fn decode_model(assignment: &Assignment, width: usize, height: usize) -> PaintedGrid {
    let mut grid = PaintedGrid::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let idx = grid.index(row, col);
            grid.cells[idx] = assignment.value(cell_var(width, row, col)).unwrap_or(false);
        }
    }
    grid
}
