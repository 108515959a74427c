// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_registry;
mod merger;
mod navbar;
mod oracle;
mod postprocess;
mod segmenter;
mod validator;

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

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
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
    /// Translate the README into one locale and synchronize navbars
    #[command(alias = "t")]
    Translate(TranslateArgs),

    /// Regenerate navigation blocks for the root README and all locales
    Navbar(NavbarArgs),

    /// Generate shell completions for yartwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Target language code (e.g., 'de', 'fr', 'ja', 'zh-tw')
    #[arg(short, long)]
    lang: String,

    /// Oracle endpoint URL override
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Model name override
    #[arg(short, long)]
    model: Option<String>,

    /// Path to the root README document
    #[arg(short, long)]
    readme: Option<String>,

    /// Output directory for locale files
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct NavbarArgs {
    /// Path to the root README document
    #[arg(short, long)]
    readme: Option<String>,

    /// Output directory holding locale files
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// YARTwAI - Yet Another README Translator with AI
///
/// Translates Markdown README files into per-language locale copies using
/// a local AI oracle, preserving code fences, HTML blocks, badges and
/// admonitions byte-for-byte, and keeps a navigation block synchronized
/// across every produced locale.
#[derive(Parser, Debug)]
#[command(name = "yartwai")]
#[command(author = "YARTwAI Team")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered README translation tool")]
#[command(long_about = "YARTwAI splits a README into structural and prose chunks, translates the
prose through a local AI oracle, validates the output against structural and
heuristic guarantees, and writes one locale file per language.

EXAMPLES:
    yartwai translate -l de                      # Translate into German
    yartwai translate -l ja -m aya-expanse:8b    # Use a specific model
    yartwai translate -l fr -r docs/README.md    # Translate another document
    yartwai navbar                               # Resynchronize navbars only
    yartwai completions bash > yartwai.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color code for log level
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
                "{}{} [{}] {}\x1B[0m",
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

// @loads: Configuration from disk, creating a default file when missing
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "yartwai", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => run_translate(args).await,
        Commands::Navbar(args) => run_navbar(args),
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    let mut config = load_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(endpoint) = &options.endpoint {
        config.oracle.endpoint = endpoint.clone();
    }

    if let Some(model) = &options.model {
        config.oracle.model = model.clone();
    }

    if let Some(readme) = &options.readme {
        config.readme_path = readme.clone();
    }

    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller.run_translation(&options.lang).await?;

    Ok(())
}

fn run_navbar(options: NavbarArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    let mut config = load_config(&options.config_path)?;

    if let Some(readme) = &options.readme {
        config.readme_path = readme.clone();
    }

    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    let updated = controller.run_navbar_sync()?;
    log::info!("Navbar synchronization touched {} document(s)", updated);

    Ok(())
}
