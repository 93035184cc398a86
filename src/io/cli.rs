//! Command-line interface for solving matrix files or generated matrices

use crate::algorithm::assignment::Assignment;
use crate::algorithm::exhaustive::verify_assignment;
use crate::algorithm::solver::{AssignmentSolver, SolverConfig, SolverPhase};
use crate::io::configuration::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_COST, DEFAULT_SEED, INPUT_EXTENSION,
    MAX_EXHAUSTIVE_DIMENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::generator::random_matrix;
use crate::io::parser::read_matrix;
use crate::io::progress::ProgressManager;
use crate::io::render::{render_assignment, render_cover, render_matrix};
use crate::matrix::CostMatrix;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hungarian")]
#[command(
    author,
    version,
    about = "Solve square assignment problems with the Hungarian method"
)]
/// Command-line arguments for the assignment solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Matrix file or directory of matrix files to solve
    #[arg(value_name = "TARGET", required_unless_present = "random")]
    pub target: Option<PathBuf>,

    /// Solve a random N x N matrix and print the result instead of reading files
    #[arg(short, long, value_name = "N", conflicts_with = "target")]
    pub random: Option<usize>,

    /// Random seed for reproducible generated matrices
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Largest cost in a generated matrix
    #[arg(short = 'c', long, default_value_t = DEFAULT_MAX_COST)]
    pub max_cost: i64,

    /// Iteration budget per solve (defaults to n*n + 1)
    #[arg(short = 'i', long)]
    pub max_iterations: Option<usize>,

    /// Cross-check each result against exhaustive search
    #[arg(short, long)]
    pub verify: bool,

    /// Include the reduced matrix and final line cover in the output
    #[arg(long)]
    pub show: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Solve files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log filter used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver limits derived from the arguments
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_iterations: self.max_iterations,
        }
    }
}

/// Install the global tracing subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `default_level`. Installing twice is
/// a no-op.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Orchestrates solving of matrix files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parsing, solving,
    /// verification or writing output fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(dimension) = self.cli.random {
            return self.process_random(dimension);
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for the generated report, which is the command's output
    #[allow(clippy::print_stdout)]
    fn process_random(&mut self, dimension: usize) -> Result<()> {
        let costs = random_matrix(dimension, self.cli.max_cost, self.cli.seed)?;
        tracing::info!(dimension, seed = self.cli.seed, "solving generated matrix");

        let report = self.solve_and_render(&costs, None)?;
        println!("{}\n\n{report}", render_matrix(&costs));
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = self.cli.target.as_deref() else {
            return Err(invalid_parameter(
                "target",
                &"<none>",
                &"a matrix file or directory is required",
            ));
        };

        if target.is_file() {
            if !Self::is_matrix_file(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("matrix files must have the .{INPUT_EXTENSION} extension"),
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target)
                .map_err(|source| file_system_error(target, "read directory", source))?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|source| file_system_error(target, "read directory", source))?
                    .path();
                if Self::is_matrix_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a matrix file or directory",
            ))
        }
    }

    // Previous outputs share the input extension and are never inputs themselves
    fn is_matrix_file(path: &Path) -> bool {
        let has_extension = path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION);
        let is_output = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        has_extension && !is_output
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let costs = read_matrix::<i64>(input_path)?;
        tracing::info!(
            file = %input_path.display(),
            dimension = costs.dimension(),
            "solving matrix file"
        );

        let report = self.solve_and_render(&costs, Some((index, input_path)))?;
        std::fs::write(&output_path, format!("{report}\n"))
            .map_err(|source| file_system_error(&output_path, "write", source))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn solve_and_render(
        &mut self,
        costs: &CostMatrix<i64>,
        file: Option<(usize, &Path)>,
    ) -> Result<String> {
        let mut solver = AssignmentSolver::with_config(costs.clone(), self.cli.solver_config());

        if let (Some((index, path)), Some(pm)) = (file, self.progress_manager.as_mut()) {
            pm.start_file(index, path, solver.iteration_limit());
        }

        while solver.phase() != SolverPhase::Done {
            solver.step()?;
            if let (Some((index, _)), Some(pm)) = (file, self.progress_manager.as_mut()) {
                pm.update_iteration(index, solver.iteration());
            }
        }

        let assignment = solver.assignment()?;
        if self.cli.verify {
            Self::verify(costs, &assignment)?;
        }

        let mut sections = vec![render_assignment(costs, &assignment)];
        if self.cli.show
            && let Some(cover) = solver.last_cover()
        {
            sections.push(format!(
                "reduced matrix with final cover:\n{}",
                render_cover(solver.working_matrix(), cover)
            ));
        }

        tracing::info!(
            total_cost = assignment.total_cost(),
            iterations = assignment.iterations(),
            adjustments = assignment.adjustments(),
            "solved"
        );

        Ok(sections.join("\n\n"))
    }

    fn verify(costs: &CostMatrix<i64>, assignment: &Assignment<i64>) -> Result<()> {
        if costs.dimension() > MAX_EXHAUSTIVE_DIMENSION {
            tracing::warn!(
                dimension = costs.dimension(),
                limit = MAX_EXHAUSTIVE_DIMENSION,
                "matrix too large for exhaustive verification, skipping"
            );
            return Ok(());
        }
        verify_assignment(costs, assignment)?;
        tracing::info!("verified against exhaustive search");
        Ok(())
    }

    /// Output path written for a matrix file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            INPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
