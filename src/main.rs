// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use potwriter::app_config::{Config, LogLevel};
use potwriter::app_controller::Controller;
use potwriter::catalog::{CatalogKind, LineEnding};

/// CLI Wrapper for CatalogKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCatalogKind {
    Template,
    Translated,
}

impl From<CliCatalogKind> for CatalogKind {
    fn from(cli_kind: CliCatalogKind) -> Self {
        match cli_kind {
            CliCatalogKind::Template => CatalogKind::Template,
            CliCatalogKind::Translated => CatalogKind::Translated,
        }
    }
}

/// CLI Wrapper for LineEnding to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLineEnding {
    Lf,
    Crlf,
}

impl From<CliLineEnding> for LineEnding {
    fn from(cli_ending: CliLineEnding) -> Self {
        match cli_ending {
            CliLineEnding::Lf => LineEnding::Lf,
            CliLineEnding::Crlf => LineEnding::CrLf,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write catalogs from entry files (default command)
    #[command(alias = "w")]
    Write(WriteArgs),

    /// Generate shell completions for potwriter
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct WriteArgs {
    /// Entry JSON file or directory of entry files
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (single file input only; defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Catalog kind to write
    #[arg(short = 'k', long, value_enum)]
    kind: Option<CliCatalogKind>,

    /// Line terminator for written catalogs
    #[arg(long, value_enum)]
    line_ending: Option<CliLineEnding>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// potwriter - gettext catalog writer
///
/// Turns extracted translation entries (JSON) into PO/POT catalog files.
#[derive(Parser, Debug)]
#[command(name = "potwriter")]
#[command(version)]
#[command(about = "Write gettext PO/POT catalogs from extracted entries")]
#[command(long_about = "potwriter reads translation entries from JSON files and writes gettext catalogs.

EXAMPLES:
    potwriter messages.json                     # Write messages.pot next to the input
    potwriter -k translated fr.json             # Write fr.po with translations embedded
    potwriter -o locale/ messages.json          # Write into another directory
    potwriter --line-ending crlf messages.json  # Use CRLF line endings
    potwriter -f extracted/                     # Convert every .json file below a directory
    potwriter completions bash > potwriter.bash # Generate bash completions

INPUT FORMAT:
    A JSON array of entries, or an object with an \"entries\" array. Each entry
    has: positions, comments, context, source, sourcePlural, translation.

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Entry JSON file or directory of entry files
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (single file input only; defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Catalog kind to write
    #[arg(short = 'k', long, value_enum)]
    kind: Option<CliCatalogKind>,

    /// Line terminator for written catalogs
    #[arg(long, value_enum)]
    line_ending: Option<CliLineEnding>,

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
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()), now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here and narrow with set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "potwriter", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Write(args)) => run_write(args),
        None => {
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_write(WriteArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                kind: cli.kind,
                line_ending: cli.line_ending,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

// @loads: Config from file, or writes the default one
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        return Config::load(config_path);
    }

    warn!("Config file not found at '{}', creating default config.", config_path);
    let config = Config::default();
    config.save(config_path)
        .context(format!("Failed to write default config to file: {}", config_path))?;
    Ok(config)
}

fn run_write(options: WriteArgs) -> Result<()> {
    // Command line level applies before the config is even read
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level((&level).into());
    }

    let mut config = load_or_create_config(&options.config_path)?;

    if let Some(kind) = &options.kind {
        config.catalog_kind = kind.clone().into();
    }

    if let Some(line_ending) = &options.line_ending {
        config.line_ending = line_ending.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    log::set_max_level((&config.log_level).into());

    let controller = Controller::with_config(config)?
        .with_skipped_file(&options.config_path);

    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
        });

        if let Some(path) = controller.run(options.input_path.clone(), output_dir, options.force_overwrite)? {
            info!("Success: {:?}", path);
        }
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            warn!("--output-dir is ignored for directory input, catalogs are written next to each entry file");
        }

        let summary = controller.run_folder(options.input_path.clone(), options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} entry file(s) failed to convert", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
