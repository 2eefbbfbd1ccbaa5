//! Configuration settings for the Fix-a-Pix solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub solver: SolverConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    /// Recount every clue on the decoded grid after solving
    pub verify_solution: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Cadical,
    Splr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub puzzle_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
    /// Also write the encoded formula in DIMACS form
    #[serde(default)]
    pub dimacs_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl std::str::FromStr for SolverBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cadical" => Ok(SolverBackend::Cadical),
            "splr" => Ok(SolverBackend::Splr),
            other => Err(format!("unknown solver backend '{}' (expected cadical or splr)", other)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "visual" => Ok(OutputFormat::Visual),
            other => Err(format!("unknown output format '{}' (expected text, json or visual)", other)),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver: SolverConfig {
                backend: SolverBackend::Cadical,
                verify_solution: true,
            },
            input: InputConfig {
                puzzle_file: PathBuf::from("input/puzzles/example.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/solutions"),
                dimacs_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !self.input.puzzle_file.exists() {
            anyhow::bail!("Puzzle file does not exist: {}", self.input.puzzle_file.display());
        }

        if self.output.output_directory.as_os_str().is_empty() {
            anyhow::bail!("Output directory must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(backend) = cli_overrides.backend {
            self.solver.backend = backend;
        }
        if let Some(ref puzzle_file) = cli_overrides.puzzle_file {
            self.input.puzzle_file = puzzle_file.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref dimacs_file) = cli_overrides.dimacs_file {
            self.output.dimacs_file = Some(dimacs_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backend: Option<SolverBackend>,
    pub puzzle_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub dimacs_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.solver.backend = SolverBackend::Splr;
        settings.output.dimacs_file = Some(PathBuf::from("out.cnf"));
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.solver.backend, SolverBackend::Splr);
        assert!(loaded.solver.verify_solution);
        assert_eq!(loaded.output.format, OutputFormat::Text);
        assert_eq!(loaded.output.dimacs_file, Some(PathBuf::from("out.cnf")));
    }

    #[test]
    fn test_parse_snake_case_enums() {
        let yaml = "\
solver:
  backend: splr
  verify_solution: false
input:
  puzzle_file: puzzles/p.txt
output:
  format: visual
  output_directory: out
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.solver.backend, SolverBackend::Splr);
        assert_eq!(settings.output.format, OutputFormat::Visual);
        assert_eq!(settings.output.dimacs_file, None);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("splr".parse::<SolverBackend>(), Ok(SolverBackend::Splr));
        assert_eq!("CaDiCaL".parse::<SolverBackend>(), Ok(SolverBackend::Cadical));
        assert!("minisat".parse::<SolverBackend>().is_err());
        assert_eq!("visual".parse::<OutputFormat>(), Ok(OutputFormat::Visual));
        assert!("png".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_validate_requires_puzzle_file() {
        let mut settings = Settings::default();
        settings.input.puzzle_file = PathBuf::from("/no/such/puzzle.txt");
        assert!(settings.validate().is_err());

        let temp_dir = tempdir().unwrap();
        let puzzle = temp_dir.path().join("p.txt");
        std::fs::write(&puzzle, "0\n").unwrap();
        settings.input.puzzle_file = puzzle;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            backend: Some(SolverBackend::Splr),
            puzzle_file: Some(PathBuf::from("a.txt")),
            output_dir: None,
            format: Some(OutputFormat::Json),
            dimacs_file: Some(PathBuf::from("a.cnf")),
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.solver.backend, SolverBackend::Splr);
        assert_eq!(settings.input.puzzle_file, PathBuf::from("a.txt"));
        assert_eq!(settings.output.output_directory, PathBuf::from("output/solutions"));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.output.dimacs_file, Some(PathBuf::from("a.cnf")));
    }
}
