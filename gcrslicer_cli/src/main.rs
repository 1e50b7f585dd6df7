use clap::Parser;
use colored::*;
use gcrslicer_cli::cli::Cli;
use gcrslicer_cli::config::ConfigManager;
use gcrslicer_cli::error::{CliError, CliResult, ErrorContext, ExitCode};
use gcrslicer_cli::orchestrators::{ResolveOrchestrator, RunOptions, RunSummary};
use gcrslicer_cli::terminal;
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    // Until the configuration is loaded, color follows the terminal alone
    colored::control::set_override(terminal::should_colorize(true));

    let debug = cli.verbose >= 2;
    match run(cli) {
        Ok(()) => process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprint!("{}", e.format_for_user(debug));
            process::exit(e.exit_code().code());
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = cli.log_level() {
        builder
            .filter_module("gcrslicer_core", level)
            .filter_module("gcrslicer_cli", level)
            .format_timestamp_millis();
    }

    builder.init();
}

fn run(cli: Cli) -> CliResult<()> {
    let manager = match &cli.config {
        Some(path) if !path.is_file() => {
            return Err(CliError::misuse("Configuration file not found")
                .with_context("config", &path.display().to_string()));
        }
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let mut config = manager
        .load()
        .map_err(|e| CliError::config(&format!("{e:#}")))?;
    config.apply_cli_overrides(&cli);
    colored::control::set_override(terminal::should_colorize(config.output.color_enabled));
    log::debug!("Configuration: {config:?}");

    let orchestrator = ResolveOrchestrator::new(RunOptions {
        paths: cli.paths.clone(),
        mode: cli.mode(),
        resolver: config.resolver_options(),
        format: config.output.format,
    });

    let summary = orchestrator.run(io::stdout().lock())?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    if summary.is_empty() {
        eprintln!("{}", "No matching files found.".yellow());
        return;
    }

    eprintln!(
        "{} {} file(s), {} bytes ({}) in {:.2}s",
        "Found".bold().green(),
        summary.files,
        summary.total_bytes,
        summary.mode,
        summary.elapsed.as_secs_f64()
    );
}
