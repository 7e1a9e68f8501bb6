// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, warn};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use transwidget::app_config::{self, Config};
use transwidget::widget::{CompletionOutcome, Key, LogNotifier, Notification, Notifier, WidgetVariant};
use transwidget::{Controller, WidgetEvent};

/// CLI Wrapper for WidgetVariant to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliVariant {
    WordLimited,
    Plain,
}

impl From<CliVariant> for WidgetVariant {
    fn from(cli_variant: CliVariant) -> Self {
        match cli_variant {
            CliVariant::WordLimited => WidgetVariant::WordLimited,
            CliVariant::Plain => WidgetVariant::Plain,
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the widget in the terminal (default command)
    Interactive,

    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the language options of both selectors
    Languages,

    /// Generate shell completions for transwidget
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transwidget - text translation widget for the terminal
///
/// Sends text to a translation service (`POST /translate`) and shows the result.
#[derive(Parser, Debug)]
#[command(name = "transwidget")]
#[command(version)]
#[command(about = "Text translation widget backed by a remote translation service")]
#[command(long_about = "transwidget reads text, posts it to a translation service and shows the translation.

EXAMPLES:
    transwidget                                 # Interactive widget using conf.json
    transwidget -s en -t hi                     # Start with English -> Hindi selected
    transwidget --variant plain                 # No word limit, Enter inserts a line break
    transwidget translate \"Hello, how are you?\" # One-shot translation
    transwidget -e http://localhost:5000 languages
    transwidget completions bash > transwidget.bash

INTERACTIVE COMMANDS:
    <text>           Append text to the source field and press Enter
    :source <code>   Select the source language
    :target <code>   Select the target language
    :translate       Click the translate button
    :reset           Click the reset button
    :ack             Acknowledge the open notification
    :quit            Leave")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Base URL of the translation service
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Source language code selected at start and after reset
    #[arg(short, long, global = true)]
    source_language: Option<String>,

    /// Target language code selected at start and after reset
    #[arg(short, long, global = true)]
    target_language: Option<String>,

    /// Widget behavior preset
    #[arg(long, value_enum, global = true)]
    variant: Option<CliVariant>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
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

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
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
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
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

/// Prints notifications for the terminal user
#[derive(Debug)]
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.requires_ack {
            eprintln!("\x1B[1;33m! {} (type :ack to continue)\x1B[0m", notification.message);
        } else {
            eprintln!("\x1B[1;31mx {}\x1B[0m", notification.message);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with trace enabled; the real level is set after config load
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "transwidget", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Some(Commands::Translate { text }) => run_translate(&config, text).await,
        Some(Commands::Languages) => {
            print_languages(&config)?;
            Ok(())
        }
        Some(Commands::Interactive) | None => run_interactive(&config).await,
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(Path::new(&cli.config_path))?;

    // Override config with CLI options if provided
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    if let Some(source_lang) = &cli.source_language {
        add_option(&mut config.languages.source_options, source_lang);
        config.languages.default_source = source_lang.clone();
    }

    if let Some(target_lang) = &cli.target_language {
        add_option(&mut config.languages.target_options, target_lang);
        config.languages.default_target = target_lang.clone();
    }

    if let Some(variant) = &cli.variant {
        config.widget.variant = variant.clone().into();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn add_option(options: &mut Vec<String>, code: &str) {
    if !options.iter().any(|o| o.eq_ignore_ascii_case(code)) {
        options.push(code.to_string());
    }
}

async fn run_translate(config: &Config, text: String) -> Result<()> {
    let mut controller = Controller::with_config(config, Box::new(LogNotifier))?;

    controller.handle_event(WidgetEvent::SourceInput(text))?;
    if controller.widget().pending_notification().is_some() {
        // Word limit hit; the truncated text is still translated
        controller.handle_event(WidgetEvent::Acknowledge)?;
    }
    controller.handle_event(WidgetEvent::TranslateClicked)?;

    for outcome in controller.settle().await {
        if let CompletionOutcome::Failed(e) = outcome {
            return Err(anyhow::Error::new(e).context("Translation failed"));
        }
    }

    println!("{}", controller.widget().translated_text());
    Ok(())
}

fn print_languages(config: &Config) -> Result<()> {
    let widget = Controller::widget_from_config(config, Box::new(LogNotifier))?;
    let controls = widget.controls();

    for (title, selector) in [("Source", &controls.source_language), ("Target", &controls.target_language)] {
        println!("{} languages:", title);
        for (index, option) in selector.options().iter().enumerate() {
            let marker = if index == selector.default_index() { "*" } else { " " };
            println!("  {} {:<4} {}", marker, option.code, option.name);
        }
    }
    Ok(())
}

async fn run_interactive(config: &Config) -> Result<()> {
    let mut controller = Controller::with_config(config, Box::new(TerminalNotifier))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut spinner: Option<ProgressBar> = None;

    print_status(&controller);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                if !handle_line(&mut controller, line.trim_end()) {
                    break;
                }
            }
            Some(outcome) = controller.next_completion() => {
                if let Some(bar) = spinner.take() {
                    bar.finish_and_clear();
                }
                match outcome {
                    CompletionOutcome::Applied => println!("{}", controller.widget().translated_text()),
                    CompletionOutcome::Failed(e) => debug!("Request failed: {}", e),
                    CompletionOutcome::Discarded => {}
                }
            }
        }

        spinner = match (spinner, controller.widget().in_flight()) {
            (Some(bar), 0) => {
                bar.finish_and_clear();
                None
            }
            (None, n) if n > 0 => Some(new_spinner()),
            (current, _) => current,
        };
    }

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    controller.detach();
    Ok(())
}

// Returns false when the user asked to leave
fn handle_line(controller: &mut Controller, line: &str) -> bool {
    let result = match line.split_once(' ').unwrap_or((line, "")) {
        (":quit", _) | (":q", _) => return false,
        (":reset", _) => controller.handle_event(WidgetEvent::ResetClicked),
        (":ack", _) => controller.handle_event(WidgetEvent::Acknowledge),
        (":translate", _) => controller.handle_event(WidgetEvent::TranslateClicked),
        (":source", code) => controller.handle_event(WidgetEvent::SelectSourceLanguage(code.trim().to_string())),
        (":target", code) => controller.handle_event(WidgetEvent::SelectTargetLanguage(code.trim().to_string())),
        _ => {
            let text = append_line(controller.widget().source_text(), line);
            controller
                .handle_event(WidgetEvent::SourceInput(text))
                .and_then(|_| controller.handle_event(WidgetEvent::SourceKeyDown(Key::Enter)))
        }
    };

    if let Err(e) = result {
        warn!("{}", e);
    }
    print_status(controller);
    true
}

// Lines land in the source field as typed text, so words never run together
fn append_line(current: &str, line: &str) -> String {
    if current.is_empty() || current.ends_with(char::is_whitespace) {
        format!("{}{}", current, line)
    } else {
        format!("{} {}", current, line)
    }
}

fn print_status(controller: &Controller) {
    let widget = controller.widget();
    let mut status = format!("[{} -> {}]", widget.source_language(), widget.target_language());
    if let Some(display) = &widget.controls().word_count {
        status.push_str(&format!(" words remaining: {}", display.text()));
    }
    eprintln!("{}", status);
}

fn new_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Translating...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
