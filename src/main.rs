// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use subforge::app_config::{Config, LogLevel, TranscriptionBackend};
use subforge::file_utils::FileManager;
use subforge::subtitle::EntryDraft;
use subforge::Controller;

/// CLI wrapper for TranscriptionBackend to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranscriptionBackend {
    WhisperApi,
    Mock,
}

impl From<CliTranscriptionBackend> for TranscriptionBackend {
    fn from(cli_backend: CliTranscriptionBackend) -> Self {
        match cli_backend {
            CliTranscriptionBackend::WhisperApi => TranscriptionBackend::WhisperApi,
            CliTranscriptionBackend::Mock => TranscriptionBackend::Mock,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate subtitles for a video, optionally burning them in
    Generate(GenerateArgs),

    /// Burn an existing subtitle file into its uploaded video
    Burn {
        /// Shared file stem of the video/subtitle pair
        #[arg(value_name = "BASE_NAME")]
        base: String,
    },

    /// Inspect and edit generated subtitle files
    Subtitles {
        #[command(subcommand)]
        command: SubtitleCommands,
    },

    /// Generate shell completions for subforge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
enum SubtitleCommands {
    /// List subtitle files available for editing
    List,

    /// Print a subtitle file's entries
    Show {
        /// Subtitle filename within the subtitle directory
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// Print entry views as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replace a subtitle file's entries from a JSON payload
    Apply {
        /// Subtitle filename within the subtitle directory
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// JSON file holding an ordered array of {start_time, end_time, text}
        #[arg(long, value_name = "PAYLOAD")]
        from: PathBuf,
    },

    /// Check a timecode string against the HH:MM:SS,mmm grammar
    ValidateTime {
        /// Timecode text to check
        #[arg(value_name = "TIMECODE")]
        time: String,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input video file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Stop after writing the .srt file instead of burning it in
    #[arg(short = 'S', long)]
    subtitles_only: bool,

    /// Transcription backend to use
    #[arg(short, long, value_enum)]
    backend: Option<CliTranscriptionBackend>,

    /// Model name to use for transcription
    #[arg(short, long)]
    model: Option<String>,

    /// Transcription language hint (e.g. 'en', 'zh'); omit for auto-detect
    #[arg(short, long)]
    language: Option<String>,
}

/// subforge - video subtitling and SRT editing toolkit
///
/// Converts uploaded video into subtitled video or standalone subtitle
/// files, and lets you edit the generated entries before finalizing output.
#[derive(Parser, Debug)]
#[command(name = "subforge")]
#[command(version = "0.1.0")]
#[command(about = "Video subtitling and SRT editing toolkit")]
#[command(long_about = "subforge extracts audio from a video, transcribes it via an external \
speech-to-text service, and produces an editable SRT subtitle file that can be burned back \
into the video.

EXAMPLES:
    subforge generate movie.mp4                 # Subtitled video in the output directory
    subforge generate -S movie.mp4              # Stop at the .srt file
    subforge generate -l zh movie.mp4           # Force transcription language
    subforge burn movie                         # Burn uploads/movie.mp4 + subtitles/movie.srt
    subforge subtitles list                     # List editable subtitle files
    subforge subtitles show movie.srt --json    # Entry views as JSON
    subforge subtitles apply movie.srt --from edits.json
    subforge subtitles validate-time 00:00:01,000
    subforge completions bash > subforge.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subforge", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    let mut config = load_or_create_config(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    match cli.command {
        Commands::Generate(args) => {
            if let Some(backend) = args.backend {
                config.transcription.backend = backend.into();
            }
            if let Some(model) = args.model {
                config.transcription.model = model;
            }
            if let Some(language) = args.language {
                config.transcription.language = Some(language);
            }
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            let report = controller
                .run_generate(args.input_path, args.subtitles_only)
                .await?;

            println!("Subtitles: {}", report.subtitle_path.display());
            if let Some(video) = report.video_path {
                println!("Video: {}", video.display());
            }
        }
        Commands::Burn { base } => {
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            let output = controller.run_burn(&base).await?;
            println!("Video: {}", output.display());
        }
        Commands::Subtitles { command } => {
            let controller = Controller::with_config(config)?;
            run_subtitles(&controller, command)?;
        }
        Commands::Completions { .. } => unreachable!("handled before config load"),
    }

    Ok(())
}

/// Dispatch the subtitle inspection/editing subcommands
fn run_subtitles(controller: &Controller, command: SubtitleCommands) -> Result<()> {
    match command {
        SubtitleCommands::List => {
            let files = controller.list_subtitles()?;
            if files.is_empty() {
                println!("No subtitle files found");
            }
            for file in files {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| file.display().to_string());
                println!("{}", name);
            }
        }
        SubtitleCommands::Show { filename, json } => {
            let views = controller.show_subtitles(&filename)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for view in views {
                    println!("{}", view.index);
                    println!("{} --> {}", view.start_time, view.end_time);
                    println!("{}", view.text);
                    println!();
                }
            }
        }
        SubtitleCommands::Apply { filename, from } => {
            let payload = FileManager::read_to_string(&from)?;
            let drafts: Vec<EntryDraft> = serde_json::from_str(&payload)
                .with_context(|| format!("Failed to parse edit payload: {:?}", from))?;

            let count = controller.apply_edits(&filename, drafts)?;
            println!("Saved {} entries to {}", count, filename);
        }
        SubtitleCommands::ValidateTime { time } => {
            if controller.validate_time(&time) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

/// Load the configuration file, creating a default one when missing
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        Config::from_file(config_path)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        Ok(config)
    }
}
