// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod caption_processor;
mod coverage;
mod detector;
mod errors;
mod file_utils;
mod language_utils;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a caption file (default command)
    #[command(alias = "validate")]
    Check(CheckArgs),

    /// Generate shell completions for capcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Caption file to validate (.srt or .vtt)
    #[arg(value_name = "CAPTIONS_FILE")]
    captions_file: PathBuf,

    /// Window start time in seconds (default 0)
    #[arg(long = "t_start")]
    t_start: Option<f64>,

    /// Window end time in seconds (default 0)
    #[arg(long = "t_end")]
    t_end: Option<f64>,

    /// Required coverage percentage, 0-100 (default 0)
    #[arg(long)]
    coverage: Option<f64>,

    /// Language detection endpoint URL (required)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Accepted locale for the caption text (e.g. 'en-US')
    #[arg(long)]
    expected_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// capcheck - Caption Track Validator
///
/// Validates a caption/subtitle file against two quality gates: window
/// coverage and detected language. Each failed check prints one JSON record
/// on standard output; a run with no output passed both checks.
#[derive(Parser, Debug)]
#[command(name = "capcheck")]
#[command(author = "capcheck Team")]
#[command(version = "1.0.0")]
#[command(about = "Caption track validation tool")]
#[command(long_about = "capcheck parses an SRT or WebVTT caption file, measures how much of a
playback window the captions cover, and asks a language-detection endpoint
whether the caption text is in the accepted locale. Failed checks are
printed as JSON lines on stdout; diagnostics go to stderr.

EXAMPLES:
    capcheck --endpoint http://localhost:8080/detect captions.srt
    capcheck --t_start 0 --t_end 600 --coverage 75 --endpoint http://detector/api captions.vtt
    capcheck --expected-language fr-FR --endpoint http://detector/api captions.srt
    capcheck --log-level debug --endpoint http://detector/api captions.srt
    capcheck completions bash > capcheck.bash

CONFIGURATION:
    The expected locale, detector timeout, and log level can also be set in
    a JSON config file (conf.json by default, used only when present).
    Command-line flags take precedence over the config file.

OUTPUT:
    {\"type\":\"caption_coverage\",\"description\":\"...\"}
    {\"type\":\"incorrect_language\",\"description\":\"...\"}")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Caption file to validate (.srt or .vtt)
    #[arg(value_name = "CAPTIONS_FILE")]
    captions_file: Option<PathBuf>,

    /// Window start time in seconds (default 0)
    #[arg(long = "t_start")]
    t_start: Option<f64>,

    /// Window end time in seconds (default 0)
    #[arg(long = "t_end")]
    t_end: Option<f64>,

    /// Required coverage percentage, 0-100 (default 0)
    #[arg(long)]
    coverage: Option<f64>,

    /// Language detection endpoint URL (required)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Accepted locale for the caption text (e.g. 'en-US')
    #[arg(long)]
    expected_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color prefix for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            // Diagnostics stay on stderr; stdout is reserved for the
            // machine-readable result stream
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "capcheck", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Check(args)) => run_check(args).await,
        None => {
            // Default behavior - use top-level args
            let captions_file = cli.captions_file.ok_or_else(|| {
                anyhow!("CAPTIONS_FILE is required when no subcommand is specified")
            })?;

            let check_args = CheckArgs {
                captions_file,
                t_start: cli.t_start,
                t_end: cli.t_end,
                coverage: cli.coverage,
                endpoint: cli.endpoint,
                expected_language: cli.expected_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_check(check_args).await
        }
    }
}

async fn run_check(options: CheckArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration when a config file is present, else use defaults
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        debug!("Config file not found at '{}', using defaults", config_path);
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(t_start) = options.t_start {
        config.window.start = t_start;
    }

    if let Some(t_end) = options.t_end {
        config.window.end = t_end;
    }

    if let Some(coverage) = options.coverage {
        config.required_coverage = coverage;
    }

    if let Some(endpoint) = &options.endpoint {
        config.detector.endpoint = endpoint.clone();
    }

    if let Some(expected_language) = &options.expected_language {
        config.expected_language = expected_language.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the validation
    let controller = Controller::with_config(config)?;
    controller.run(&options.captions_file).await
}
