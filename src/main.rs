//! `meeting-minutes` command line entry point.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use meeting_minutes::adapters::document::DocxMinutesRenderer;
use meeting_minutes::application::{
    GenerateMinutesCommand, GenerateMinutesError, GenerateMinutesHandler,
};
use meeting_minutes::config::{AppConfig, ConfigError, LoggingConfig};
use meeting_minutes::domain::foundation::ValidationError;
use meeting_minutes::domain::minutes::{MeetingForm, MeetingRecord};

#[derive(Parser)]
#[command(name = "meeting-minutes")]
#[command(about = "Assemble meeting minutes into a .docx document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a meeting record into a .docx file
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// JSON file holding the meeting record
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Treat the input as raw form fields (text lists, DD/MM/YYYY dates)
    #[arg(long)]
    form: bool,

    /// Logo image for the page header
    #[arg(short, long, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// Output directory (defaults to the configured one)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Numbered sections instead of narrative prose
    #[arg(long)]
    structured: bool,

    /// Disable line numbering
    #[arg(long = "no-line-numbers")]
    no_line_numbers: bool,

    /// Keep signature lines out of the line numbering
    #[arg(long = "exclude-signatures")]
    exclude_signatures: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    Input(#[from] ValidationError),

    #[error(transparent)]
    Generate(#[from] GenerateMinutesError),

    #[error("Cannot write document: {0}")]
    Write(std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Render(args) => cmd_render(&config, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Rendering failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn cmd_render(config: &AppConfig, args: RenderArgs) -> Result<(), CliError> {
    let record = read_record(&args.input, args.form)?;
    let record = if record.raw_title().trim().is_empty() {
        record.with_title(config.render.default_title.clone())
    } else {
        record
    };

    let mut options = config
        .render
        .options(!args.structured, !args.no_line_numbers);
    if args.exclude_signatures {
        options = options.with_numbered_signatures(false);
    }

    let mut command = GenerateMinutesCommand::from_record(record).with_options(options);
    if let Some(path) = &args.logo {
        command = command.with_logo(read_file(path)?);
    }

    let renderer = DocxMinutesRenderer::new(config.render.theme());
    let handler = GenerateMinutesHandler::new(Arc::new(renderer));
    let document = handler.handle(command)?;

    for warning in &document.warnings {
        warn!("{}", warning);
        eprintln!("warning: {}", warning);
    }

    let directory = args.out.as_deref().unwrap_or(&config.output.directory);
    let path = document.write_to_dir(directory).map_err(CliError::Write)?;

    info!(path = %path.display(), "Minutes written");
    println!("{}", path.display());
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_record(path: &Path, form: bool) -> Result<MeetingRecord, CliError> {
    let bytes = read_file(path)?;
    let invalid = |e: serde_json::Error| ValidationError::invalid_format("input", e.to_string());

    if form {
        let form: MeetingForm = serde_json::from_slice(&bytes).map_err(invalid)?;
        Ok(MeetingRecord::try_from(form)?)
    } else {
        Ok(serde_json::from_slice(&bytes).map_err(invalid)?)
    }
}
