#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::PathBuf;

use layout_bridge::app_config::{self, Config};
use layout_bridge::app_controller::Controller;
use layout_bridge::database::MetaRepository;
use layout_bridge::layout::PostId;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the integration list with this integration appended
    Support {
        /// Integrations the host already knows about
        #[arg(value_name = "INTEGRATION")]
        existing: Vec<String>,
    },

    /// Register the strings of a post's layout and print them as JSON lines
    Register {
        /// Post whose layout is registered
        #[arg(long)]
        post: PostId,

        /// Package kind (defaults to this integration's name)
        #[arg(long, conflicts_with = "package")]
        kind: Option<String>,

        /// JSON file holding the full package descriptor
        #[arg(long)]
        package: Option<PathBuf>,
    },

    /// Apply translated strings and write the translated post's layout
    Translate {
        /// Post holding the original layout
        #[arg(long)]
        original: PostId,

        /// Post receiving the translated layout
        #[arg(long)]
        translated: PostId,

        /// JSON file with translation results keyed by string name
        #[arg(long)]
        results: PathBuf,

        /// Target language code (defaults to the configured language)
        #[arg(long)]
        lang: Option<String>,

        /// Package kind (defaults to this integration's name)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Print the layout stored on a post
    Show {
        /// Post to inspect
        #[arg(long)]
        post: PostId,
    },

    /// Remove the layout stored on a post
    Clear {
        /// Post whose layout is removed
        #[arg(long)]
        post: PostId,
    },

    /// Print metadata store statistics
    Stats,

    /// Generate shell completions for layout-bridge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// layout-bridge - translate page-builder layouts through a translation host
///
/// Extracts the texts of a page-builder layout stored in post metadata,
/// registers them with a translation host and rebuilds translated layouts
/// from the host's results.
#[derive(Parser, Debug)]
#[command(name = "layout-bridge")]
#[command(version)]
#[command(about = "Page-builder layout translation bridge")]
#[command(long_about = "layout-bridge registers page-builder layout strings with a translation host and writes translated layouts back.

EXAMPLES:
    layout-bridge support \"Other Builder\"                  # Announce support
    layout-bridge register --post 12                        # Register strings of post 12
    layout-bridge register --post 12 --package pkg.json     # Use a host package descriptor
    layout-bridge translate --original 12 --translated 13 --results fr.json --lang fr
    layout-bridge show --post 13                            # Print the stored layout
    layout-bridge clear --post 13                           # Remove a stored layout
    layout-bridge completions bash > layout-bridge.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// SQLite database path (overrides the configuration)
    #[arg(short, long, env = "LAYOUT_BRIDGE_DB", global = true)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI colour for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, colour) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info; the configured level is applied once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "layout-bridge", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.into());
    }

    let (mut config, created) = Config::load_or_create(&cli.config_path)?;
    if created {
        warn!(
            "Config file not found at {:?}, created default config.",
            cli.config_path
        );
    }

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone().into();
    } else {
        log::set_max_level(config.log_level.into());
    }

    if let Some(database) = &cli.database {
        config.database_path = Some(database.clone());
    }

    let controller = Controller::open(config)?;
    run_command(cli.command, &controller)
}

fn run_command(command: Commands, controller: &Controller<MetaRepository>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Support { existing } => {
            let integrations = controller.support(existing);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&integrations)?)?;
        }
        Commands::Register { post, kind, package } => {
            let package = controller.resolve_package(kind, package.as_deref())?;
            controller.register(post, &package, &mut stdout)?;
        }
        Commands::Translate {
            original,
            translated,
            results,
            lang,
            kind,
        } => {
            let outcome = controller.translate(original, translated, &results, lang, kind)?;
            writeln!(stdout, "{}", serde_json::to_string_pretty(&outcome)?)?;
        }
        Commands::Show { post } => {
            let document = controller.show(post)?;
            writeln!(stdout, "{}", serde_json::to_string_pretty(&document)?)?;
        }
        Commands::Clear { post } => {
            controller.clear(post)?;
        }
        Commands::Stats => {
            let (stats, posts) = controller.stats()?;
            writeln!(stdout, "{}", stats)?;
            writeln!(stdout, "Posts with a layout: {}", posts)?;
        }
        // Generated in main before any store is opened
        Commands::Completions { .. } => {}
    }

    Ok(())
}
