//! Solution representation for Fix-a-Pix puzzles

use crate::config::SolverBackend;
use crate::puzzle::{ClueGrid, PaintedGrid};
use crate::sat::EncodingStatistics;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A solved puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The clue grid that was solved
    pub puzzle: ClueGrid,
    /// The painted/blank assignment
    pub painted: PaintedGrid,
    /// Time taken by encoding and solving
    #[serde(skip)]
    pub solve_time: Duration,
    pub metadata: SolutionMetadata,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Stable identifier derived from the painted cells
    pub id: String,
    pub painted_cells: usize,
    /// Painted cells over all cells (0.0 to 1.0)
    pub painted_density: f64,
    pub clue_count: usize,
    pub backend: SolverBackend,
    /// Size of the formula that was solved
    pub encoding: EncodingStatistics,
    /// Whether every clue was recounted on the painted grid
    pub verified: bool,
}

/// Compact view of a solution for summary files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub painted_cells: usize,
    pub total_clauses: usize,
    pub solve_time_ms: u64,
    pub verified: bool,
}

impl Solution {
    pub fn new(
        puzzle: ClueGrid,
        painted: PaintedGrid,
        backend: SolverBackend,
        encoding: &EncodingStatistics,
        verified: bool,
        solve_time: Duration,
    ) -> Self {
        let metadata = SolutionMetadata::analyze(&puzzle, &painted, backend, encoding, verified);

        Self {
            puzzle,
            painted,
            solve_time,
            metadata,
        }
    }

    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            id: self.metadata.id.clone(),
            width: self.painted.width,
            height: self.painted.height,
            painted_cells: self.metadata.painted_cells,
            total_clauses: self.metadata.encoding.total_clauses,
            solve_time_ms: self.solve_time.as_millis() as u64,
            verified: self.metadata.verified,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl SolutionMetadata {
    pub fn analyze(
        puzzle: &ClueGrid,
        painted: &PaintedGrid,
        backend: SolverBackend,
        encoding: &EncodingStatistics,
        verified: bool,
    ) -> Self {
        let painted_cells = painted.painted_count();
        let total_cells = painted.width * painted.height;

        Self {
            id: Self::generate_id(painted),
            painted_cells,
            painted_density: painted_cells as f64 / total_cells as f64,
            clue_count: puzzle.clue_count(),
            backend,
            encoding: encoding.clone(),
            verified,
        }
    }

    /// Identifier hashed from the painted grid
    fn generate_id(painted: &PaintedGrid) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        painted.cells.hash(&mut hasher);
        painted.width.hash(&mut hasher);
        painted.height.hash(&mut hasher);

        format!("sol_{:x}", hasher.finish())
    }
}
