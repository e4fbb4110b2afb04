//! Uncomment command implementation.
//!
//! Walks a directory tree and rewrites every file with the configured
//! extension in place, comments stripped. Files are handled one at a time in
//! visit order, or spread over a rayon pool when more than one job is asked
//! for.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, error, info, warn};
use uncomment_fs::{
    collect_files, collect_readable_files, has_extension, uncomment_file, DirectoryWalker,
    WalkError,
};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandResult};
use crate::config::{resolve_jobs, Config};
use crate::error::{Result, UncommentError};

/// Arguments for the uncomment command.
#[derive(Debug, Clone, Default)]
pub struct UncommentArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Root of the tree to uncomment.
    pub directory: PathBuf,
    /// Extension override; the configured one is used when `None`.
    pub extension: Option<String>,
    /// Abort on the first file error.
    pub fail_fast: bool,
    /// Parallel job override; `Some(0)` means one per CPU.
    pub jobs: Option<usize>,
}

/// Per-run counters.
#[derive(Debug, Default)]
struct Tally {
    processed: usize,
    failed: usize,
    warnings: Vec<String>,
}

impl Tally {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Done(warning) => {
                self.processed += 1;
                self.warnings.extend(warning);
            }
            FileOutcome::Failed => self.failed += 1,
        }
    }

    /// Count directories the walk had to step over.
    fn record_skipped(&mut self, skipped: Vec<WalkError>) {
        for err in skipped {
            log_failure(&err);
            self.failed += 1;
        }
    }
}

/// What happened to one file when failures are isolated.
enum FileOutcome {
    /// Rewritten, with an optional unterminated-construct warning.
    Done(Option<String>),
    /// Could not be read or written.
    Failed,
}

/// Uncomment command handler.
pub struct UncommentCommand {
    args: UncommentArgs,
    config: Config,
}

impl UncommentCommand {
    /// Merge command-line overrides over the loaded configuration.
    fn effective_config(&self) -> Config {
        Config {
            extension: self
                .args
                .extension
                .clone()
                .unwrap_or_else(|| self.config.extension.clone()),
            fail_fast: self.args.fail_fast || self.config.fail_fast,
            jobs: self.args.jobs.unwrap_or(self.config.jobs),
        }
    }

    /// Walk the tree and rewrite every matching file.
    ///
    /// Isolated failures are counted in the result rather than returned;
    /// only a fail-fast abort or an unusable configuration is an error.
    pub fn run(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        let settings = self.effective_config();
        settings.validate()?;

        let jobs = resolve_jobs(settings.jobs);
        let walked = if jobs == 1 {
            self.run_sequential(&settings)
        } else {
            self.run_parallel(&settings, jobs)
        };

        let tally = match walked {
            Ok(tally) => tally,
            Err(UncommentError::Walk(err @ WalkError::DirectoryNotFound { .. })) => {
                println!("{}", err);
                return Ok(CommandResult::success());
            }
            Err(err) => return Err(err),
        };

        Ok(CommandResult::success()
            .with_items_processed(tally.processed)
            .with_items_failed(tally.failed)
            .with_execution_time_ms(start_time.elapsed().as_millis() as u64)
            .with_warnings(tally.warnings))
    }

    /// Visit files in order on the current thread.
    fn run_sequential(&self, settings: &Config) -> Result<Tally> {
        let mut tally = Tally::default();
        let skipped = {
            let mut walker = DirectoryWalker::new(
                has_extension(&settings.extension),
                |file: &Path| {
                    tally.record(self.handle_file(file, settings.fail_fast)?);
                    Ok::<(), UncommentError>(())
                },
            )
            .skip_unreadable(!settings.fail_fast);
            walker.recurse(&self.args.directory)?;
            walker.into_skipped()
        };
        tally.record_skipped(skipped);
        Ok(tally)
    }

    /// Collect the matching files first, then rewrite them on a pool of `jobs` threads.
    fn run_parallel(&self, settings: &Config, jobs: usize) -> Result<Tally> {
        let predicate = has_extension(&settings.extension);
        let (files, skipped) = if settings.fail_fast {
            (collect_files(&self.args.directory, predicate)?, Vec::new())
        } else {
            collect_readable_files(&self.args.directory, predicate)?
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| {
                UncommentError::CommandExecution(format!("{} {}", error_messages::POOL_FAILED, e))
            })?;

        let outcomes = pool.install(|| {
            files
                .par_iter()
                .map(|file| self.handle_file(file, settings.fail_fast))
                .collect::<Result<Vec<_>>>()
        })?;

        let mut tally = Tally::default();
        for outcome in outcomes {
            tally.record(outcome);
        }
        tally.record_skipped(skipped);
        Ok(tally)
    }

    /// Uncomment one file, applying the failure policy.
    fn handle_file(&self, file: &Path, fail_fast: bool) -> Result<FileOutcome> {
        match self.process_file(file) {
            Ok(warning) => Ok(FileOutcome::Done(warning)),
            Err(err) if fail_fast => Err(err.into()),
            Err(err) => {
                log_failure(&err);
                Ok(FileOutcome::Failed)
            }
        }
    }

    /// Rewrite one file and announce it, returning a warning for an
    /// unterminated construct.
    fn process_file(&self, file: &Path) -> uncomment_fs::Result<Option<String>> {
        let report = uncomment_file(file)?;
        println!("{} {}", output_messages::UNCOMMENTED, file.display());

        Ok(report.unterminated.map(|open| {
            debug!(
                path = %file.display(),
                construct = %open.construct,
                line = open.line,
                "file ends inside an unterminated construct"
            );
            format!("{}: {}", file.display(), open)
        }))
    }

    /// Log the collected warnings, plus statistics if verbose.
    fn log_completion(&self, result: &CommandResult) {
        if !result.warnings.is_empty() {
            warn!("{} {}", output_messages::WARNINGS, result.warnings.len());
            for warning in &result.warnings {
                warn!("  {}", warning);
            }
        }

        if self.args.verbose {
            info!(
                processed = result.items_processed,
                failed = result.items_failed,
                warnings = result.warnings.len(),
                "{} {} {:.3}s",
                Self::name(),
                output_messages::COMPLETED,
                result.execution_time_ms as f64 / 1000.0
            );
        }
    }

    /// Return an error naming the failed item count, if any.
    fn check_for_failures(&self, result: &CommandResult) -> Result<()> {
        if !result.success {
            return Err(UncommentError::CommandExecution(format!(
                "{} {}",
                error_messages::FILES_FAILED,
                result.items_failed
            )));
        }
        Ok(())
    }
}

impl Command for UncommentCommand {
    type Args = UncommentArgs;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let result = self.run()?;
        self.log_completion(&result);
        Ok(result)
    }

    fn name() -> &'static str {
        "uncomment"
    }
}

/// Log an isolated failure.
fn log_failure(err: &WalkError) {
    error!(path = %err.path().display(), "{} {}", output_messages::ERROR, err);
}

/// Run the uncomment command with the given arguments and configuration.
pub fn run_uncomment(args: UncommentArgs, config: Config) -> Result<()> {
    let command = UncommentCommand::new(args, config);
    let result = command.execute()?;
    command.check_for_failures(&result)
}
