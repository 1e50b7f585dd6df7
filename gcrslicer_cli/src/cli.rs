//! Command line arguments

use crate::output::OutputFormat;
use clap::{ArgAction, ArgGroup, Parser};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gcr-slicer")]
#[command(author, version, about = "* GCR Slicer |/-\\ Find and slice audio files for SampleBrain", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["analyze", "plot_audio", "write_dir"])
))]
pub struct Cli {
    /// Files or directories to search
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<String>,

    /// Analyze each file
    #[arg(long)]
    pub analyze: bool,

    /// Plot each file
    #[arg(long)]
    pub plot_audio: bool,

    /// Directory to write audio file slices to
    #[arg(long, value_name = "DIR")]
    pub write_dir: Option<PathBuf>,

    /// Amount of output during runtime (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Accepted file extension (can be specified multiple times)
    #[arg(short = 'x', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Accept files of every extension
    #[arg(long, conflicts_with = "extensions")]
    pub all_files: bool,

    /// Directory search paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file to use instead of the default one
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// What to do with each resolved file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Analyze,
    PlotAudio,
    WriteDir(PathBuf),
}

impl Mode {
    /// Name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::PlotAudio => "plot-audio",
            Self::WriteDir(_) => "write-dir",
        }
    }

    pub fn write_dir(&self) -> Option<&Path> {
        match self {
            Self::WriteDir(dir) => Some(dir),
            _ => None,
        }
    }
}

impl Cli {
    /// The selected mode; clap guarantees exactly one is set
    pub fn mode(&self) -> Mode {
        if let Some(dir) = &self.write_dir {
            Mode::WriteDir(dir.clone())
        } else if self.plot_audio {
            Mode::PlotAudio
        } else {
            Mode::Analyze
        }
    }

    /// Log level for the crate's own modules, if raised above the default
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            _ => Some(LevelFilter::Debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gcr-slicer").chain(args.iter().copied()))
    }

    #[test]
    fn test_help_is_not_a_parse_result() {
        let error = parse(&["--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let error = parse(&["--version"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_arguments_is_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&[""]).is_err());
    }

    #[test]
    fn test_mode_without_paths_is_rejected() {
        assert!(parse(&["--analyze"]).is_err());
        assert!(parse(&["--write-dir", "/tmp"]).is_err());
    }

    #[test]
    fn test_paths_without_mode_are_rejected() {
        let error = parse(&["data/"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        assert!(parse(&["data/", "data2/", "data3/"]).is_err());
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let error = parse(&["data/", "data2/", "--analyze", "--write-dir", "/tmp"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        assert!(parse(&["data/", "--write-dir", "/tmp", "--analyze"]).is_err());
        assert!(parse(&["data/", "--plot-audio", "--analyze"]).is_err());
    }

    #[test]
    fn test_good_syntax() {
        let cli = parse(&["data/", "data2/", "data3/", "--analyze"]).unwrap();
        assert_eq!(cli.paths, vec!["data/", "data2/", "data3/"]);
        assert_eq!(cli.mode(), Mode::Analyze);

        let cli = parse(&["data/", "data2/", "data3/", "--write-dir", "/tmp"]).unwrap();
        assert_eq!(cli.mode(), Mode::WriteDir(PathBuf::from("/tmp")));
        assert_eq!(cli.mode().write_dir(), Some(Path::new("/tmp")));

        let cli = parse(&["take.wav", "--plot-audio"]).unwrap();
        assert_eq!(cli.mode(), Mode::PlotAudio);
        assert_eq!(cli.mode().name(), "plot-audio");
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["a", "--analyze"]).unwrap().log_level(), None);
        assert_eq!(
            parse(&["a", "--analyze", "-v"]).unwrap().log_level(),
            Some(LevelFilter::Info)
        );
        assert_eq!(
            parse(&["a", "--analyze", "-vvv"]).unwrap().log_level(),
            Some(LevelFilter::Debug)
        );
    }

    #[test]
    fn test_extension_options() {
        let cli = parse(&["a", "--analyze", "-x", "wav", "--extension", ".flac"]).unwrap();
        assert_eq!(cli.extensions, vec!["wav", ".flac"]);

        let error = parse(&["a", "--analyze", "-x", "wav", "--all-files"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_format_option() {
        let cli = parse(&["a", "--analyze", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(parse(&["a", "--analyze", "--format", "csv"]).is_err());
    }
}
