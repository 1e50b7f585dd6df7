//! Report output for resolved files
//!
//! Each resolved file becomes a [`FileReport`], rendered by an
//! [`OutputFormatter`] and written to a [`ReportSink`] as soon as it is
//! produced.

mod formatters;

pub use formatters::{JsonFormatter, TextFormatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One relative path per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Errors raised while writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single resolved file as seen by the selected mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub mode: &'static str,
    pub path: String,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_dir: Option<String>,
}

impl FileReport {
    pub fn new(mode: &'static str, path: &Path, size_bytes: u64) -> Self {
        Self {
            mode,
            path: path.to_string_lossy().into_owned(),
            size_bytes,
            write_dir: None,
        }
    }

    pub fn with_write_dir(mut self, write_dir: &Path) -> Self {
        self.write_dir = Some(write_dir.to_string_lossy().into_owned());
        self
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a single report as one line (without the newline)
    fn format_single(&self, report: &FileReport) -> Result<String, ReportError>;
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Streams formatted reports to a writer, one line each
pub struct ReportSink<W: Write> {
    formatter: Box<dyn OutputFormatter>,
    writer: W,
    written: usize,
}

impl<W: Write> ReportSink<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self {
            formatter: create_formatter(format),
            writer,
            written: 0,
        }
    }

    /// Write one report and flush it through
    pub fn write(&mut self, report: &FileReport) -> Result<(), ReportError> {
        let line = self.formatter.format_single(report)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Number of reports written so far
    pub fn written(&self) -> usize {
        self.written
    }
}
