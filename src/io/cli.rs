//! Command-line interface for shuffling and checking image puzzles in batch

use crate::algorithm::reconstruct::Strategy;
use crate::io::configuration::{
    ARRANGEMENT_SUFFIX, DEFAULT_SEED, GRID_SIDE, INPUT_EXTENSIONS, OUTPUT_SUFFIX, WORKING_HEIGHT,
    WORKING_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_and_resize};
use crate::io::progress::{ProgressManager, Stage};
use crate::session::{Board, Verdict};
use crate::spatial::grid::partition;
use crate::spatial::tiles::TileSet;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Two board positions to exchange, written `A:B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair(pub usize, pub usize);

impl FromStr for SwapPair {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| format!("expected A:B, got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid position '{v}': {e}"))
        };
        Ok(Self(parse(a)?, parse(b)?))
    }
}

#[derive(Parser)]
#[command(name = "edgestitch")]
#[command(
    author,
    version,
    about = "Shuffle an image into a 4x4 puzzle and check it against an edge-matching reconstruction"
)]
/// Command-line arguments for the puzzle tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for the shuffle
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Keep tiles in their original order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Exchange two board positions before checking (repeatable)
    #[arg(long = "swap", value_name = "A:B")]
    pub swaps: Vec<SwapPair>,

    /// Graph traversal used for reconstruction
    #[arg(long, value_enum, default_value_t = Strategy::Positional)]
    pub strategy: Strategy,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details about graphs and orders
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
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
}

/// Per-file result of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The arrangement matched the reconstruction
    Solved,
    /// The arrangement did not match
    Unsolved,
    /// The reconstruction heuristic could not order the tiles
    Unsupported,
}

/// Counts of per-file outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files whose arrangement matched
    pub solved: usize,
    /// Files whose arrangement did not match
    pub unsolved: usize,
    /// Files the heuristic could not reconstruct
    pub unsupported: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Solved => self.solved += 1,
            FileOutcome::Unsolved => self.unsolved += 1,
            FileOutcome::Unsupported => self.unsupported += 1,
        }
    }

    /// Total number of processed files
    pub const fn total(&self) -> usize {
        self.solved + self.unsolved + self.unsupported
    }
}

/// Orchestrates batch processing of image files with progress tracking
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

    /// Process files according to CLI arguments
    ///
    /// Reconstruction failures are reported per file and counted; any other
    /// error stops the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image I/O or a swap fails
    pub fn process(&mut self) -> Result<BatchSummary> {
        let files = self.collect_files()?;
        let mut summary = BatchSummary::default();

        if files.is_empty() {
            log::info!("nothing to process in '{}'", self.cli.target.display());
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let outcome = self.process_file(file, index)?;
            summary.record(outcome);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "{} files: {} solved, {} unsolved, {} could not be checked",
            summary.total(),
            summary.solved,
            summary.unsolved,
            summary.unsupported
        );
        Ok(summary)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG or JPEG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    // Bars share stderr with the logger, so hide them while a line is written
    fn report(&self, level: log::Level, message: &str) {
        self.progress_manager.as_ref().map_or_else(
            || log::log!(level, "{message}"),
            |pm| pm.suspend(|| log::log!(level, "{message}")),
        );
    }

    fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, stage);
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<FileOutcome> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let image = load_and_resize(input_path, WORKING_WIDTH, WORKING_HEIGHT)?;

        self.enter_stage(index, Stage::Partitioning);
        let tiles = TileSet::new(partition(&image, GRID_SIDE, GRID_SIDE)?, GRID_SIDE, GRID_SIDE)?;
        let mut board = Board::new(tiles).with_strategy(self.cli.strategy);
        if !self.cli.no_shuffle {
            board.shuffle(self.cli.seed);
        }
        for &SwapPair(a, b) in &self.cli.swaps {
            board.swap(a, b)?;
        }

        let arrangement = board.arrangement()?;
        export_png(&arrangement, Self::get_arrangement_path(input_path))?;

        self.enter_stage(index, Stage::Checking);
        let outcome = match board.check() {
            Ok(report) => {
                self.enter_stage(index, Stage::Exporting);
                export_png(&report.reconstruction, Self::get_output_path(input_path))?;
                match report.verdict {
                    Verdict::Solved => {
                        self.report(
                            log::Level::Info,
                            &format!("{}: puzzle assembled correctly", input_path.display()),
                        );
                        FileOutcome::Solved
                    }
                    Verdict::Unsolved => {
                        self.report(
                            log::Level::Info,
                            &format!("{}: puzzle assembled incorrectly", input_path.display()),
                        );
                        FileOutcome::Unsolved
                    }
                }
            }
            Err(e) if e.is_reconstruction_failure() => {
                self.report(
                    log::Level::Warn,
                    &format!(
                        "{}: the algorithm cannot check this image ({e})",
                        input_path.display()
                    ),
                );
                FileOutcome::Unsupported
            }
            Err(e) => return Err(e),
        };

        if let Some(ref mut pm) = self.progress_manager {
            let verdict = match outcome {
                FileOutcome::Solved => "solved",
                FileOutcome::Unsolved => "unsolved",
                FileOutcome::Unsupported => "cannot check",
            };
            pm.complete_file(index, verdict);
        }

        Ok(outcome)
    }

    /// Path of the reconstructed image for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::suffixed_png(input_path, OUTPUT_SUFFIX)
    }

    /// Path of the composed arrangement for an input file
    pub fn get_arrangement_path(input_path: &Path) -> PathBuf {
        Self::suffixed_png(input_path, ARRANGEMENT_SUFFIX)
    }

    fn suffixed_png(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

// A suffixed PNG only counts as our output while its source sits beside it
fn is_generated_output(path: &Path) -> bool {
    let is_png = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    if !is_png {
        return false;
    }

    let source_stem = [OUTPUT_SUFFIX, ARRANGEMENT_SUFFIX]
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix));
    let generated = source_stem.is_some_and(|source| {
        INPUT_EXTENSIONS.iter().any(|ext| {
            [ext.to_string(), ext.to_ascii_uppercase()]
                .iter()
                .any(|variant| path.with_file_name(format!("{source}.{variant}")).is_file())
        })
    });
    if generated {
        log::debug!("ignoring generated output {}", path.display());
    }
    generated
}
