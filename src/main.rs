// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use translation_agent::app_config::{self, ClipboardBackend, Config};
use translation_agent::categories::Profile;
use translation_agent::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use translation_agent::commands::{HELP, SessionCommand};
use translation_agent::form::TranslationForm;
use translation_agent::select::Select;
use translation_agent::view;

/// CLI Wrapper for Profile to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProfile {
    Strict,
    Relaxed,
}

impl From<CliProfile> for Profile {
    fn from(cli_profile: CliProfile) -> Self {
        match cli_profile {
            CliProfile::Strict => Profile::Strict,
            CliProfile::Relaxed => Profile::Relaxed,
        }
    }
}

/// CLI Wrapper for ClipboardBackend to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliClipboard {
    System,
    Memory,
}

impl From<CliClipboard> for ClipboardBackend {
    fn from(cli_clipboard: CliClipboard) -> Self {
        match cli_clipboard {
            CliClipboard::System => ClipboardBackend::System,
            CliClipboard::Memory => ClipboardBackend::Memory,
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
    /// Start the interactive translation form (default command)
    Run,

    /// List the category profiles and their options
    Profiles,

    /// Generate shell completions for translation-agent
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// translation-agent - single-form translation desk
///
/// Enter source text, choose the categories of the document and run a mock
/// translation. Every submission is recorded in a session history.
#[derive(Parser, Debug)]
#[command(name = "translation-agent")]
#[command(version)]
#[command(about = "Interactive translation form with session history")]
#[command(long_about = "translation-agent runs an interactive translation form in the terminal.

EXAMPLES:
    translation-agent                        # Start with the default config
    translation-agent -p relaxed             # Categories optional
    translation-agent --clipboard memory     # Do not touch the system clipboard
    translation-agent profiles               # List category options
    translation-agent completions bash > translation-agent.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category profile to use
    #[arg(short, long, value_enum)]
    profile: Option<CliProfile>,

    /// Clipboard backend for the copy action
    #[arg(long, value_enum)]
    clipboard: Option<CliClipboard>,

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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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
    // Trace is the ceiling; the effective level is set once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "translation-agent", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Profiles) => {
            print!("{}", view::render_profiles());
            Ok(())
        }
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_session(config).await
        }
    }
}

fn load_config(options: &CommandLineOptions) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config_path = Path::new(&options.config_path);
    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path.display());
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(profile) = &options.profile {
        config.profile = profile.clone().into();
    }
    if let Some(clipboard) = &options.clipboard {
        config.clipboard = clipboard.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Ok(config)
}

async fn run_session(config: Config) -> Result<()> {
    let clipboard: Arc<dyn Clipboard> = match config.clipboard {
        ClipboardBackend::System => Arc::new(SystemClipboard::new()),
        ClipboardBackend::Memory => Arc::new(MemoryClipboard::new()),
    };
    let form = TranslationForm::from_config(&config, clipboard);
    info!("Session started with {} profile", form.profile());

    print!("{}", view::render(&form.snapshot()));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }
        execute(&form, command).await;
    }

    debug!("Session ended with {} history entries", form.audit_log().len());
    Ok(())
}

async fn execute(form: &TranslationForm, command: SessionCommand) {
    match command {
        SessionCommand::Text(text) => {
            form.update_source_text(text);
            print!("{}", view::render_source_panel(&form.snapshot()));
        }
        SessionCommand::Append(text) => {
            let mut source = form.source_text();
            if !source.is_empty() {
                source.push('\n');
            }
            source.push_str(&text);
            form.update_source_text(source);
            print!("{}", view::render_source_panel(&form.snapshot()));
        }
        SessionCommand::Clear => {
            form.update_source_text(String::new());
            print!("{}", view::render_source_panel(&form.snapshot()));
        }
        SessionCommand::Set { field, key } => {
            let snapshot = form.snapshot();
            let Some(options) = form.profile().options(field) else {
                println!("{} is not part of the {} profile", field, form.profile());
                return;
            };
            let current = snapshot.selection.get(field).unwrap_or_default();
            let select = Select::new(field.label(), options, current);
            let mut outcome = Ok(());
            select.change(&key, |chosen| outcome = form.update_category(field, chosen));
            match outcome {
                Ok(()) => {
                    print!("{}", view::render_selects(&form.snapshot(), false));
                    println!("{}", view::render_submit_button(&form.snapshot()));
                }
                Err(e) => println!("{}", e),
            }
        }
        SessionCommand::Options(Some(field)) => match view::render_field_options(&form.snapshot(), field) {
            Some(rendered) => print!("{}", rendered),
            None => println!("{} is not part of the {} profile", field, form.profile()),
        },
        SessionCommand::Options(None) => {
            print!("{}", view::render_selects(&form.snapshot(), true));
        }
        SessionCommand::Translate => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Translating...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let result = form.submit().await;
            spinner.finish_and_clear();

            let snapshot = form.snapshot();
            if result.is_ok() {
                print!("{}", view::render_output_panel(&snapshot));
            }
            if let Some(banner) = view::render_error(&snapshot) {
                println!("{}", banner);
            }
        }
        SessionCommand::Copy => match form.copy_output().await {
            Ok(()) => print!("{}", view::render_output_panel(&form.snapshot())),
            Err(e) => println!("! {}", e),
        },
        SessionCommand::Log { json } => {
            if json {
                match form.audit_log().to_json() {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => println!("Failed to serialize history: {}", e),
                }
            } else {
                print!("{}", view::render_history(&form.snapshot()));
            }
        }
        SessionCommand::Show => print!("{}", view::render(&form.snapshot())),
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => {}
    }
}
