//! Main CLI application for the Fix-a-Pix solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fix_a_pix::{
    config::{CliOverrides, OutputFormat, Settings, SolverBackend},
    puzzle::{create_example_puzzles, load_painted_from_file, load_puzzle_from_file},
    solve::{FixAPixProblem, SolutionValidator},
    utils::{ColorOutput, SolutionFormatter},
    FixAPixError,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fix_a_pix")]
#[command(about = "Fix-a-Pix SAT Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a Fix-a-Pix puzzle
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// SAT backend: cadical or splr (overrides config)
        #[arg(short, long)]
        backend: Option<SolverBackend>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, json or visual (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Also write the CNF encoding to this DIMACS file
        #[arg(long)]
        dimacs: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a painted grid against a puzzle
    Validate {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Solution file ('#' painted, '.' blank)
        #[arg(short, long)]
        solution: PathBuf,
    },

    /// Show clue and encoding statistics without solving
    Analyze {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            puzzle,
            backend,
            output,
            format,
            dimacs,
            verbose,
        } => {
            let overrides = CliOverrides {
                backend,
                puzzle_file: puzzle,
                output_dir: output,
                format,
                dimacs_file: dimacs,
            };
            solve_command(config, overrides, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate { puzzle, solution } => validate_command(puzzle, solution),
        Commands::Analyze { puzzle } => analyze_command(puzzle),
    }
}

fn solve_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🧩 Starting Fix-a-Pix Solver"));

    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };
    settings.merge_with_cli(&overrides);

    if verbose {
        println!("Configuration:");
        println!("  Backend: {:?}", settings.solver.backend);
        println!("  Verify solution: {}", settings.solver.verify_solution);
        println!("  Puzzle file: {}", settings.input.puzzle_file.display());
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!("  Format: {:?}", settings.output.format);
        if let Some(ref dimacs) = settings.output.dimacs_file {
            println!("  DIMACS file: {}", dimacs.display());
        }
        println!();
    }

    settings.validate().context("Configuration validation failed")?;

    let start_time = Instant::now();
    let problem = FixAPixProblem::new(settings.clone()).context("Failed to create problem")?;

    if verbose {
        println!("{}", SolutionFormatter::format_puzzle(problem.puzzle()));
        println!("{}", ColorOutput::detail(&problem.estimate_complexity().to_string()));
    }

    println!("{}", ColorOutput::info("🧮 Encoding clues and solving..."));
    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(err) => {
            if let Some(FixAPixError::Unsatisfiable) = err.downcast_ref::<FixAPixError>() {
                println!("{}", ColorOutput::warning("❌ Puzzle has no solution"));
            }
            return Err(err.context("Failed to solve puzzle"));
        }
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Solved in {:.3}s",
            start_time.elapsed().as_secs_f64()
        ))
    );
    println!("\n{}", SolutionFormatter::format_solution(&solution));

    if let Some(ref dimacs) = settings.output.dimacs_file {
        println!("CNF written to {}", dimacs.display());
    }

    println!("{}", ColorOutput::info("💾 Saving solution..."));
    let name = settings
        .input
        .puzzle_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("puzzle");
    let saved = SolutionFormatter::save_solution(
        &solution,
        &settings.output.output_directory,
        name,
        settings.output.format,
    )
    .context("Failed to save solution")?;
    println!("{}", ColorOutput::success(&format!("Solution saved to {}", saved.display())));

    if verbose {
        println!("\n{}", ColorOutput::detail(&solution.metadata.encoding.to_string()));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.puzzle_file = PathBuf::from("input/puzzles/plus.txt");
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut splr_config = Settings::default();
    splr_config.solver.backend = SolverBackend::Splr;
    splr_config.input.puzzle_file = PathBuf::from("input/puzzles/corners.txt");
    splr_config.output.format = OutputFormat::Visual;
    splr_config.to_file(examples_dir.join("splr.yaml"))?;

    let mut dimacs_config = Settings::default();
    dimacs_config.input.puzzle_file = PathBuf::from("input/puzzles/stroke.txt");
    dimacs_config.output.format = OutputFormat::Json;
    dimacs_config.output.dimacs_file = Some(PathBuf::from("output/stroke.cnf"));
    dimacs_config.to_file(examples_dir.join("dimacs.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(puzzle_path: PathBuf, solution_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating solution..."));

    let puzzle = load_puzzle_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;
    let painted = load_painted_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let result = SolutionValidator::new().validate(&puzzle, &painted);
    println!("{}", SolutionFormatter::format_validation(&result));

    if result.is_valid {
        println!("{}", ColorOutput::success("✅ Solution is valid!"));
        Ok(())
    } else {
        println!("{}", ColorOutput::error("❌ Solution is invalid"));
        anyhow::bail!(
            "{}",
            result
                .error_message
                .unwrap_or_else(|| "solution violates the puzzle".to_string())
        )
    }
}

fn analyze_command(puzzle_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing puzzle..."));

    let puzzle = load_puzzle_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;

    println!("{}", SolutionFormatter::format_puzzle(&puzzle));

    let total_cells = puzzle.width * puzzle.height;
    let zero_clues = puzzle.clues().filter(|&(_, _, k)| k == 0).count();
    let full_clues = puzzle
        .clues()
        .filter(|&(row, col, k)| k as usize == puzzle.neighborhood_size(row, col))
        .count();

    println!("Clue Statistics:");
    println!("  Clues: {} of {} cells", puzzle.clue_count(), total_cells);
    println!(
        "  Density: {:.1}%",
        (puzzle.clue_count() as f64 / total_cells as f64) * 100.0
    );
    println!("  Zero clues: {}", zero_clues);
    println!("  Full-neighborhood clues: {}", full_clues);

    let problem = FixAPixProblem::with_puzzle(Settings::default(), puzzle);

    println!("\n{}", problem.estimate_complexity());

    let encoding_stats = problem
        .encoding_statistics()
        .context("Failed to encode puzzle")?;
    println!("{}", encoding_stats);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "fix_a_pix",
            "solve",
            "--config",
            "test.yaml",
            "--backend",
            "splr",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["fix_a_pix", "solve", "--backend", "minisat"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/splr.yaml").exists());
        assert!(temp_dir.path().join("input/puzzles/plus.txt").exists());
    }

    #[test]
    fn test_solve_then_validate() {
        let temp_dir = tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("stroke.txt");
        std::fs::write(&puzzle_path, ". 1 .\n. 1 .\n. 1 .\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let overrides = CliOverrides {
            puzzle_file: Some(puzzle_path.clone()),
            output_dir: Some(output_dir.clone()),
            ..Default::default()
        };
        solve_command(temp_dir.path().join("missing.yaml"), overrides, true).unwrap();

        let solution_path = output_dir.join("stroke_solution.txt");
        assert!(solution_path.exists());
        assert!(validate_command(puzzle_path, solution_path).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_painting() {
        let temp_dir = tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("p.txt");
        let solution_path = temp_dir.path().join("s.txt");
        std::fs::write(&puzzle_path, "0 .\n. .\n").unwrap();
        std::fs::write(&solution_path, "#.\n..\n").unwrap();

        assert!(validate_command(puzzle_path, solution_path).is_err());
    }

    #[test]
    fn test_solve_unsatisfiable_fails() {
        let temp_dir = tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("conflict.txt");
        std::fs::write(&puzzle_path, "0 .\n. 4\n").unwrap();

        let overrides = CliOverrides {
            puzzle_file: Some(puzzle_path),
            output_dir: Some(temp_dir.path().join("out")),
            ..Default::default()
        };
        let err = solve_command(temp_dir.path().join("missing.yaml"), overrides, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FixAPixError>(),
            Some(&FixAPixError::Unsatisfiable)
        );
    }

    #[test]
    fn test_analyze_command() {
        let temp_dir = tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("p.txt");
        std::fs::write(&puzzle_path, ". 4 .\n. . .\n").unwrap();
        assert!(analyze_command(puzzle_path).is_ok());
    }
}
