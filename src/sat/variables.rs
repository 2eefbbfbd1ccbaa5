//! Variable management for the SAT encoding
//!
//! Cell variables occupy the fixed prefix `1..=width*height` in row-major
//! order, so decoding a model never needs a lookup table. Auxiliary
//! variables are handed out above that prefix.

use crate::error::{FixAPixError, Result};

/// Identifier of the variable for cell `(row, col)` on a grid `width` cells wide
///
/// Callers stay inside a grid whose cell count a [`VariableManager`] accepted,
/// so the identifier fits in `i32`.
#[inline]
pub fn cell_var(width: usize, row: usize, col: usize) -> i32 {
    (row * width + col + 1) as i32
}

/// Allocates SAT variable identifiers
#[derive(Debug, Clone)]
pub struct VariableManager {
    width: usize,
    height: usize,
    /// Highest identifier handed out so far
    last_id: i32,
}

impl VariableManager {
    /// Create a manager with the counter positioned right after the cell prefix
    ///
    /// Fails when the cell prefix alone does not fit in the literal range.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let last_id = width
            .checked_mul(height)
            .and_then(|cells| i32::try_from(cells).ok())
            .ok_or(FixAPixError::VariableOverflow {
                requested: width.saturating_mul(height),
            })?;

        Ok(Self {
            width,
            height,
            last_id,
        })
    }

    /// Variable ID for the cell at `(row, col)`; never touches the counter
    pub fn cell_variable(&self, row: usize, col: usize) -> Result<i32> {
        if row >= self.height || col >= self.width {
            return Err(FixAPixError::CellOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(cell_var(self.width, row, col))
    }

    /// Allocate a fresh auxiliary variable
    pub fn fresh(&mut self) -> Result<i32> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(FixAPixError::VariableOverflow {
                requested: self.last_id as usize + 1,
            })?;
        Ok(self.last_id)
    }

    /// Number of cell variables
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of auxiliaries allocated so far
    pub fn auxiliary_count(&self) -> usize {
        self.last_id as usize - self.cell_count()
    }

    /// Total number of variables (cells plus auxiliaries)
    pub fn variable_count(&self) -> usize {
        self.last_id as usize
    }

    /// Highest identifier in use
    pub fn max_variable(&self) -> i32 {
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_variables_row_major() {
        let vm = VariableManager::new(3, 2).unwrap();

        assert_eq!(vm.cell_variable(0, 0).unwrap(), 1);
        assert_eq!(vm.cell_variable(0, 2).unwrap(), 3);
        assert_eq!(vm.cell_variable(1, 0).unwrap(), 4);
        assert_eq!(vm.cell_variable(1, 2).unwrap(), 6);
        assert_eq!(vm.variable_count(), 6);
    }

    #[test]
    fn test_variable_bounds() {
        let vm = VariableManager::new(2, 2).unwrap();

        assert!(vm.cell_variable(1, 1).is_ok());
        assert!(vm.cell_variable(2, 0).is_err());
        assert!(vm.cell_variable(0, 2).is_err());
    }

    #[test]
    fn test_fresh_above_cell_prefix() {
        let mut vm = VariableManager::new(2, 2).unwrap();

        let a = vm.fresh().unwrap();
        let b = vm.fresh().unwrap();
        assert_eq!(a, 5);
        assert_eq!(b, 6);
        assert_eq!(vm.auxiliary_count(), 2);
        assert_eq!(vm.max_variable(), 6);

        // cell lookups do not disturb the counter
        vm.cell_variable(1, 1).unwrap();
        assert_eq!(vm.fresh().unwrap(), 7);
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(matches!(
            VariableManager::new(1 << 16, 1 << 16).unwrap_err(),
            FixAPixError::VariableOverflow { .. }
        ));
        assert!(VariableManager::new(usize::MAX, 2).is_err());

        let mut vm = VariableManager::new(i32::MAX as usize - 1, 1).unwrap();
        assert_eq!(vm.fresh().unwrap(), i32::MAX);
        assert!(matches!(
            vm.fresh().unwrap_err(),
            FixAPixError::VariableOverflow { .. }
        ));
        assert_eq!(vm.max_variable(), i32::MAX);
    }
}
