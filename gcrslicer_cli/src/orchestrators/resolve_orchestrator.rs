//! Resolve command orchestrator
//!
//! Drives a [`PathResolver`] and streams every resolved file into a report
//! sink as soon as it is pulled. The selected mode only labels the reports;
//! no audio is read or written.

use crate::cli::Mode;
use crate::error::{CliError, CliResult, ErrorContext};
use crate::output::{FileReport, OutputFormat, ReportSink};
use anyhow::Context;
use gcrslicer_core::{PathResolver, ResolverOptions};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

/// Everything needed for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub paths: Vec<String>,
    pub mode: Mode,
    pub resolver: ResolverOptions,
    pub format: OutputFormat,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub mode: &'static str,
    pub files: usize,
    pub total_bytes: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }
}

/// Orchestrator for a resolve-and-report run
pub struct ResolveOrchestrator {
    options: RunOptions,
}

impl ResolveOrchestrator {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Resolve every search path, writing one report per file to `writer`
    ///
    /// A fatal resolver error stops the run; reports already written stay
    /// written.
    pub fn run<W: Write>(&self, writer: W) -> CliResult<RunSummary> {
        let mode = &self.options.mode;
        if let Some(write_dir) = mode.write_dir() {
            validate_write_dir(write_dir)?;
        }

        let start = Instant::now();
        let mut resolver =
            PathResolver::new(self.options.paths.iter().cloned(), self.options.resolver.clone())?;
        info!(
            "Resolving {} search path(s) for {}",
            self.options.paths.len(),
            mode.name()
        );

        let mut sink = ReportSink::new(self.options.format, writer);
        let mut total_bytes = 0;

        while let Some(path) = resolver.pull()? {
            let size_bytes = file_size(&resolver.root_dir().join(&path));
            total_bytes += size_bytes;

            let mut report = FileReport::new(mode.name(), &path, size_bytes);
            if let Some(write_dir) = mode.write_dir() {
                report = report.with_write_dir(write_dir);
            }

            debug!("Resolved {} ({size_bytes} bytes)", path.display());
            sink.write(&report)
                .with_context(|| format!("Failed to report {}", path.display()))?;
        }

        Ok(RunSummary {
            mode: mode.name(),
            files: sink.written(),
            total_bytes,
            elapsed: start.elapsed(),
        })
    }
}

/// A write directory may be missing, but must not be something else
fn validate_write_dir(dir: &Path) -> CliResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::misuse("Write directory is not a directory")
            .with_context("write_dir", &dir.display().to_string()));
    }
    Ok(())
}

fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!("Cannot read size of {}: {e}", path.display());
            0
        }
    }
}
