//! File I/O for clue grids and painted grids

use super::{ClueGrid, PaintedGrid};
use crate::error::FixAPixError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a clue grid from a text file
///
/// Each line is a row of whitespace-separated tokens: `.` or `-1` for a cell
/// without a clue, a digit `0`-`9` for a clue.
pub fn load_puzzle_from_file<P: AsRef<Path>>(path: P) -> Result<ClueGrid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    parse_puzzle_from_string(&content)
        .with_context(|| format!("Failed to parse puzzle from file: {}", path.as_ref().display()))
}

/// Parse a clue grid from its text form
pub fn parse_puzzle_from_string(content: &str) -> Result<ClueGrid> {
    let mut rows = Vec::new();

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let row_idx = rows.len();
        let mut row = Vec::new();
        for (col_idx, token) in line.split_whitespace().enumerate() {
            let clue = match token {
                "." | "-1" => None,
                _ => match token.parse::<u8>() {
                    Ok(k) if k <= 9 && token.len() == 1 => Some(k),
                    _ => anyhow::bail!(
                        "Invalid token '{}' at position ({}, {}). Use '.' or '-1' for an empty cell and 0-9 for a clue",
                        token,
                        row_idx,
                        col_idx
                    ),
                },
            };
            row.push(clue);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(FixAPixError::EmptyGrid).context("Puzzle file contains no rows");
    }

    Ok(ClueGrid::from_rows(rows)?)
}

/// Load a painted grid from a text file
/// Format: one row per line, '#' or '1' for painted cells and '.' or '0' for blank ones
pub fn load_painted_from_file<P: AsRef<Path>>(path: P) -> Result<PaintedGrid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read solution file: {}", path.as_ref().display()))?;

    parse_painted_from_string(&content)
        .with_context(|| format!("Failed to parse solution from file: {}", path.as_ref().display()))
}

/// Parse a painted grid from its text form
pub fn parse_painted_from_string(content: &str) -> Result<PaintedGrid> {
    let mut cells = Vec::new();

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let row_idx = cells.len();
        let mut row = Vec::new();
        for (col_idx, ch) in line.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            match ch {
                '#' | '1' => row.push(true),
                '.' | '0' => row.push(false),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '#', '1', '.' and '0' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    Ok(PaintedGrid::from_cells(cells)?)
}

/// Render a painted grid as text, '#' painted and '.' blank
pub fn painted_to_string(grid: &PaintedGrid) -> String {
    let mut result = String::with_capacity(grid.height * (grid.width + 1));

    for row in 0..grid.height {
        for col in 0..grid.width {
            result.push(if grid.get(row, col) { '#' } else { '.' });
        }
        result.push('\n');
    }

    result
}

/// Save a painted grid to a text file
pub fn save_painted_to_file<P: AsRef<Path>>(grid: &PaintedGrid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, painted_to_string(grid))
        .with_context(|| format!("Failed to write solution to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example puzzle files
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Plus sign on a 5x5 board
    let plus_content = "\
. . . . .
. 3 4 3 .
. 4 5 4 .
. 3 4 3 .
. . . . .
";
    std::fs::write(dir.join("plus.txt"), plus_content).context("Failed to write plus.txt")?;

    // Corner clues paint the whole board, numeric form
    let frame_content = "\
4 -1 -1 4
-1 -1 -1 -1
-1 -1 -1 -1
4 -1 -1 4
";
    std::fs::write(dir.join("corners.txt"), frame_content).context("Failed to write corners.txt")?;

    // One painted cell somewhere in the middle row
    let stroke_content = "\
. 1 .
. 1 .
. 1 .
";
    std::fs::write(dir.join("stroke.txt"), stroke_content).context("Failed to write stroke.txt")?;

    // Contradictory clues
    let conflict_content = "0 .\n. 4\n";
    std::fs::write(dir.join("conflict.txt"), conflict_content).context("Failed to write conflict.txt")?;

    Ok(())
}
