//! Clue grid and painted grid representations

use crate::error::{FixAPixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the 3x3 window in row-major order
const WINDOW: [isize; 3] = [-1, 0, 1];

/// A rectangular grid of clues; `None` marks a cell without a clue
///
/// Serialized as rows and deserialized through [`ClueGrid::from_rows`], so a
/// loaded grid passes the same checks as a parsed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClueRows", into = "ClueRows")]
pub struct ClueGrid {
    pub width: usize,
    pub height: usize,
    clues: Vec<Option<u8>>,
}

impl ClueGrid {
    /// Create a clue grid from rows of optional clues
    ///
    /// Rejects empty or ragged input, clues above 9, and clues larger than
    /// the neighborhood they sit in.
    pub fn from_rows(rows: Vec<Vec<Option<u8>>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(FixAPixError::EmptyGrid);
        }

        let height = rows.len();
        let width = rows[0].len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FixAPixError::RaggedGrid {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
            for (j, clue) in row.iter().enumerate() {
                if let Some(value) = *clue {
                    if value > 9 {
                        return Err(FixAPixError::ClueOutOfRange {
                            row: i,
                            col: j,
                            value: value as i32,
                        });
                    }
                }
            }
        }

        let grid = Self {
            width,
            height,
            clues: rows.into_iter().flatten().collect(),
        };
        grid.check_clues()?;
        Ok(grid)
    }

    /// Create a clue grid from the integer form where `-1` means "no clue"
    pub fn from_values(values: Vec<Vec<i32>>) -> Result<Self> {
        let mut rows = Vec::with_capacity(values.len());
        for (i, row) in values.into_iter().enumerate() {
            let mut clues = Vec::with_capacity(row.len());
            for (j, value) in row.into_iter().enumerate() {
                match value {
                    -1 => clues.push(None),
                    0..=9 => clues.push(Some(value as u8)),
                    _ => return Err(FixAPixError::ClueOutOfRange { row: i, col: j, value }),
                }
            }
            rows.push(clues);
        }
        Self::from_rows(rows)
    }

    /// Grid dimensions as `(rows, columns)`
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Clue at a cell, `None` when unspecified or out of bounds
    pub fn clue(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            self.clues[row * self.width + col]
        } else {
            None
        }
    }

    /// In-bounds cells of the 3x3 window centered on `(row, col)`, row-major,
    /// including the center itself.
    ///
    /// Panics if `(row, col)` lies outside the grid.
    pub fn neighborhood(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        assert!(
            row < self.height && col < self.width,
            "neighborhood of ({}, {}) requested on a {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );

        let mut cells = Vec::with_capacity(9);
        for dr in WINDOW {
            for dc in WINDOW {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && r < self.height as isize && c >= 0 && c < self.width as isize {
                    cells.push((r as usize, c as usize));
                }
            }
        }
        cells
    }

    /// Size of the neighborhood without materializing it
    pub fn neighborhood_size(&self, row: usize, col: usize) -> usize {
        let span = |pos: usize, len: usize| 1 + usize::from(pos > 0) + usize::from(pos + 1 < len);
        span(row, self.height) * span(col, self.width)
    }

    /// All clues as `(row, col, k)` in row-major order
    pub fn clues(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.clues
            .iter()
            .enumerate()
            .filter_map(move |(idx, clue)| clue.map(|k| (idx / self.width, idx % self.width, k)))
    }

    /// Number of cells carrying a clue
    pub fn clue_count(&self) -> usize {
        self.clues.iter().filter(|clue| clue.is_some()).count()
    }

    fn check_clues(&self) -> Result<()> {
        for (row, col, clue) in self.clues() {
            let neighborhood = self.neighborhood_size(row, col);
            if clue as usize > neighborhood {
                return Err(FixAPixError::InvalidClue {
                    row,
                    col,
                    clue,
                    neighborhood,
                });
            }
        }
        Ok(())
    }
}

/// Serialized form of a [`ClueGrid`]
#[derive(Serialize, Deserialize)]
struct ClueRows {
    rows: Vec<Vec<Option<u8>>>,
}

impl TryFrom<ClueRows> for ClueGrid {
    type Error = FixAPixError;

    fn try_from(raw: ClueRows) -> Result<Self> {
        Self::from_rows(raw.rows)
    }
}

impl From<ClueGrid> for ClueRows {
    fn from(grid: ClueGrid) -> Self {
        let rows = grid
            .clues
            .chunks(grid.width)
            .map(|row| row.to_vec())
            .collect();
        Self { rows }
    }
}

impl fmt::Display for ClueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.clue(row, col) {
                    Some(k) => write!(f, "{}", k)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A solved grid: `true` means painted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaintedRows", into = "PaintedRows")]
pub struct PaintedGrid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl PaintedGrid {
    /// Create an all-blank grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a painted grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(FixAPixError::EmptyGrid);
        }

        let height = cells.len();
        let width = cells[0].len();

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(FixAPixError::RaggedGrid {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether a cell is painted; out of bounds cells are blank
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    pub fn set(&mut self, row: usize, col: usize, painted: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(FixAPixError::CellOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = painted;
        Ok(())
    }

    /// Rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.width).map(|row| row.to_vec()).collect()
    }

    /// Coordinates of every painted cell
    pub fn painted_cells(&self) -> Vec<(usize, usize)> {
        let mut painted = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col) {
                    painted.push((row, col));
                }
            }
        }
        painted
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Painted cells among `cells`
    pub fn count_painted(&self, cells: &[(usize, usize)]) -> usize {
        cells.iter().filter(|&&(row, col)| self.get(row, col)).count()
    }
}

/// Serialized form of a [`PaintedGrid`]
#[derive(Serialize, Deserialize)]
struct PaintedRows {
    rows: Vec<Vec<bool>>,
}

impl TryFrom<PaintedRows> for PaintedGrid {
    type Error = FixAPixError;

    fn try_from(raw: PaintedRows) -> Result<Self> {
        Self::from_cells(raw.rows)
    }
}

impl From<PaintedGrid> for PaintedRows {
    fn from(grid: PaintedGrid) -> Self {
        Self {
            rows: grid.to_rows(),
        }
    }
}

impl fmt::Display for PaintedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_grid_from_values() {
        let grid = ClueGrid::from_values(vec![vec![-1, 2, -1], vec![0, -1, 4]]).unwrap();
        assert_eq!(grid.dims(), (2, 3));
        assert_eq!(grid.clue(0, 0), None);
        assert_eq!(grid.clue(0, 1), Some(2));
        assert_eq!(grid.clue(1, 0), Some(0));
        assert_eq!(grid.clue(5, 5), None);
        assert_eq!(grid.clue_count(), 3);
    }

    #[test]
    fn test_neighborhood_sizes() {
        let grid = ClueGrid::from_values(vec![vec![-1; 4]; 4]).unwrap();
        assert_eq!(grid.neighborhood(0, 0).len(), 4);
        assert_eq!(grid.neighborhood(0, 2).len(), 6);
        assert_eq!(grid.neighborhood(2, 0).len(), 6);
        assert_eq!(grid.neighborhood(1, 1).len(), 9);
        assert_eq!(grid.neighborhood(3, 3).len(), 4);

        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid.neighborhood(row, col).len(), grid.neighborhood_size(row, col));
            }
        }
    }

    #[test]
    fn test_neighborhood_row_major_order() {
        let grid = ClueGrid::from_values(vec![vec![-1; 3]; 3]).unwrap();
        assert_eq!(
            grid.neighborhood(0, 1),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_single_row_and_single_cell() {
        let grid = ClueGrid::from_values(vec![vec![-1; 5]]).unwrap();
        assert_eq!(grid.neighborhood(0, 0).len(), 2);
        assert_eq!(grid.neighborhood(0, 2).len(), 3);

        let single = ClueGrid::from_values(vec![vec![1]]).unwrap();
        assert_eq!(single.neighborhood(0, 0), vec![(0, 0)]);
    }

    #[test]
    #[should_panic]
    fn test_neighborhood_out_of_range_panics() {
        let grid = ClueGrid::from_values(vec![vec![-1; 2]; 2]).unwrap();
        grid.neighborhood(2, 0);
    }

    #[test]
    fn test_clue_exceeding_neighborhood() {
        let err = ClueGrid::from_values(vec![vec![3]]).unwrap_err();
        assert_eq!(
            err,
            FixAPixError::InvalidClue {
                row: 0,
                col: 0,
                clue: 3,
                neighborhood: 1
            }
        );

        let err = ClueGrid::from_values(vec![vec![5, -1], vec![-1, -1]]).unwrap_err();
        assert!(matches!(err, FixAPixError::InvalidClue { neighborhood: 4, .. }));
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(ClueGrid::from_values(vec![]).unwrap_err(), FixAPixError::EmptyGrid);
        assert_eq!(ClueGrid::from_values(vec![vec![]]).unwrap_err(), FixAPixError::EmptyGrid);
        assert!(matches!(
            ClueGrid::from_values(vec![vec![-1, -1], vec![-1]]).unwrap_err(),
            FixAPixError::RaggedGrid { row: 1, len: 1, expected: 2 }
        ));
        assert!(matches!(
            ClueGrid::from_values(vec![vec![10]]).unwrap_err(),
            FixAPixError::ClueOutOfRange { value: 10, .. }
        ));
        assert!(matches!(
            ClueGrid::from_values(vec![vec![-2]]).unwrap_err(),
            FixAPixError::ClueOutOfRange { value: -2, .. }
        ));
    }

    #[test]
    fn test_clues_row_major() {
        let grid = ClueGrid::from_values(vec![vec![-1, 1], vec![2, -1]]).unwrap();
        let clues: Vec<_> = grid.clues().collect();
        assert_eq!(clues, vec![(0, 1, 1), (1, 0, 2)]);
    }

    #[test]
    fn test_painted_grid() {
        let mut grid = PaintedGrid::new(3, 2);
        assert_eq!(grid.painted_count(), 0);
        grid.set(1, 2, true).unwrap();
        assert!(grid.get(1, 2));
        assert!(!grid.get(7, 7));
        assert!(grid.set(2, 0, true).is_err());
        assert_eq!(grid.painted_cells(), vec![(1, 2)]);
        assert_eq!(grid.to_rows(), vec![vec![false, false, false], vec![false, false, true]]);
        assert_eq!(grid.count_painted(&[(0, 0), (1, 2)]), 1);
    }

    #[test]
    fn test_json_goes_through_checks() {
        let grid = ClueGrid::from_values(vec![vec![-1, 2, -1], vec![0, -1, -1]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"rows":[[null,2,null],[0,null,null]]}"#);
        assert_eq!(serde_json::from_str::<ClueGrid>(&json).unwrap(), grid);

        for bad in [
            r#"{"width":3,"height":3,"clues":[9]}"#,
            r#"{"rows":[]}"#,
            r#"{"rows":[[null,1],[null]]}"#,
            r#"{"rows":[[12]]}"#,
            r#"{"rows":[[3]]}"#,
        ] {
            assert!(serde_json::from_str::<ClueGrid>(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_painted_json_goes_through_checks() {
        let grid = PaintedGrid::from_cells(vec![vec![true, false], vec![false, true]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<PaintedGrid>(&json).unwrap(), grid);

        for bad in [
            r#"{"width":0,"height":2,"cells":[]}"#,
            r#"{"rows":[]}"#,
            r#"{"rows":[[true],[true,false]]}"#,
        ] {
            assert!(serde_json::from_str::<PaintedGrid>(bad).is_err(), "{}", bad);
        }

        let empty = PaintedGrid::new(0, 2);
        assert!(empty.to_rows().is_empty());
    }

    #[test]
    fn test_display() {
        let grid = ClueGrid::from_values(vec![vec![-1, 1], vec![0, -1]]).unwrap();
        assert_eq!(grid.to_string(), ". 1\n0 .\n");
    }
}
