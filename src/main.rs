// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod analysis;
mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod spelling;
mod tagger;
mod transcript;

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
    /// Analyze a lesson transcript against a reference book text (default command)
    #[command(alias = "analyse")]
    Analyze(AnalyzeArgs),

    /// Generate shell completions for vocascope
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Lesson transcript file with [T]:/[S]: tagged turns
    #[arg(value_name = "TRANSCRIPT")]
    transcript_path: PathBuf,

    /// Reference book text file
    #[arg(value_name = "BOOK")]
    book_path: PathBuf,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// vocascope - Student Vocabulary Analyzer
///
/// Extracts the vocabulary a student used during a lesson transcript,
/// normalizes each word, and reports which words fall outside the
/// reference book's vocabulary.
#[derive(Parser, Debug)]
#[command(name = "vocascope")]
#[command(version = "1.0.0")]
#[command(about = "Student vocabulary analysis for lesson transcripts")]
#[command(long_about = "vocascope segments student speech out of [T]:/[S]: tagged lesson
transcripts, filters tokens down to meaningful words, normalizes them
(spelling correction + lemmatization), and reports the words that fall
outside a reference book's vocabulary.

EXAMPLES:
    vocascope lesson.srt book.txt                  # Analyze using default config
    vocascope -o report.json lesson.srt book.txt   # Write the report to a file
    vocascope --log-level debug lesson.srt book.txt
    vocascope completions bash > vocascope.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. Point spelling.dictionary_path at a SymSpell
    frequency dictionary to enable spelling correction.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lesson transcript file with [T]:/[S]: tagged turns
    #[arg(value_name = "TRANSCRIPT")]
    transcript_path: Option<PathBuf>,

    /// Reference book text file
    #[arg(value_name = "BOOK")]
    book_path: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

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

    // @returns: ANSI color for log level
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
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

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vocascope", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // Default behavior - use top-level args for a bare invocation
            let transcript_path = cli.transcript_path.ok_or_else(|| {
                anyhow!("TRANSCRIPT is required when no subcommand is specified")
            })?;
            let book_path = cli
                .book_path
                .ok_or_else(|| anyhow!("BOOK is required when no subcommand is specified"))?;

            run_analyze(AnalyzeArgs {
                transcript_path,
                book_path,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the analysis
    let controller = Controller::with_config(config)?;
    let report = controller.run(&options.transcript_path, &options.book_path)?;

    match &options.output {
        Some(output_path) => {
            Controller::write_report(&report, output_path)?;
        }
        None => {
            println!("{}", Controller::render_report(&report)?);
        }
    }

    // A transcript without student speech is a non-success outcome
    if report.is_error() {
        std::process::exit(1);
    }

    Ok(())
}
