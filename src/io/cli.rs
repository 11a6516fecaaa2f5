//! Command-line interface for solving tile files one by one or in batches

use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::algorithm::executor::Puzzle;
use crate::algorithm::solver::SolverConfig;
use crate::analysis::patterns::{Habitat, Pattern};
use crate::io::configuration::{DEFAULT_MAX_STEPS, OUTPUT_SUFFIX, TILE_FILE_EXTENSION};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, export_habitat_png};
use crate::io::progress::ProgressManager;

#[derive(Parser, Debug)]
#[command(name = "jigsawtile")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles and measure sea monster roughness"
)]
/// Command-line arguments for the tile assembler
pub struct Cli {
    /// Tile file or directory of tile files to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Only classify tiles and report the corner product
    #[arg(short, long)]
    pub corners_only: bool,

    /// Maximum backtracking steps before giving up on a file
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Write the assembled image as `<stem>_habitat.png` next to the input
    #[arg(short, long)]
    pub export_png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration derived from the arguments
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_steps: self.max_steps,
        }
    }
}

/// Answers computed for one tile file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Input file
    pub path: PathBuf,
    /// Product of the four corner tile identifiers
    pub corner_product: u64,
    /// Scan result, absent when only corners were requested
    pub habitat: Option<Habitat>,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.path.display();
        write!(f, "{name}: corner product {}", self.corner_product)?;
        if let Some(ref habitat) = self.habitat {
            write!(
                f,
                "\n{name}: roughness {} ({} sea monsters, {})",
                habitat.roughness, habitat.instances, habitat.orientation
            )?;
        }
        Ok(())
    }
}

/// Orchestrates solving of tile files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every target file, printing answers to stdout
    ///
    /// A failing file is reported on stderr and the rest of the batch still
    /// runs. The failure count is printed once the batch ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, or the first error of any
    /// file that failed
    // Allow print for results on stdout and per-file failures on stderr
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            warn!(target = %self.cli.target.display(), "no tile files found");
            return Ok(());
        }

        self.progress_manager.initialize(files.len());

        let mut first_failure = None;
        for file in &files {
            self.progress_manager.start_file(file);
            let outcome = self.solve_file(file);
            self.progress_manager.complete_file(outcome.is_ok());

            match outcome {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    let verdict = if e.is_input_error() {
                        "rejected"
                    } else {
                        "failed"
                    };
                    warn!(file = %file.display(), error = %e, verdict, "file not solved");
                    eprintln!("{}: {verdict}: {e}", file.display());
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
            }
        }

        self.progress_manager.finish();
        if let Some(summary) = self.progress_manager.summary() {
            eprintln!("{summary}");
        }

        first_failure.map_or(Ok(()), Err)
    }

    /// Solve one tile file according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, classification
    /// or placement fails, no sea monster is found, or PNG export fails.
    /// With export enabled the plain image is still written when no sea
    /// monster is found.
    pub fn solve_file(&self, path: &Path) -> Result<FileReport> {
        let start_time = Instant::now();
        let mut puzzle = Puzzle::from_file(path, self.cli.solver_config())?;
        let corner_product = puzzle.corner_product()?;

        let habitat = if self.cli.corners_only {
            None
        } else {
            let assembly = puzzle.assemble()?;
            let habitat = Pattern::sea_monster().scan(&assembly.image);
            if self.cli.export_png {
                let output_path = Self::output_path(path);
                habitat.as_ref().map_or_else(
                    || export_grid_as_png(&assembly.image, &output_path),
                    |found| export_habitat_png(found, &output_path),
                )?;
            }
            Some(habitat.ok_or(PuzzleError::PatternNotFound)?)
        };

        info!(
            file = %path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "solved file"
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            corner_product,
            habitat,
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            return Ok(vec![target.clone()]);
        }
        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a tile file or a directory",
            ));
        }

        let entries = std::fs::read_dir(target).map_err(|e| PuzzleError::FileSystem {
            path: target.clone(),
            operation: "list directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(TILE_FILE_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Where the PNG for `input_path` is written
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
