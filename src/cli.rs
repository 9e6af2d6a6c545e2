use crate::delivery_schedule::create_delivery_schedule;
use crate::delivery_schedule::response::ScheduleResponse;
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "coffee-delivery-scheduler",
    about = "Builds a conflict-free coffee delivery schedule from booking requests"
)]
pub struct Cli {
    /// Booking request file, reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log dropped orders (ignored when RUST_LOG is set)
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The schedule text as is
    Text,
    /// `{"deliverySchedule": ...}` or `{"error": ...}`
    Json,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        init_tracing(self.verbose);

        // editors and `echo` leave a trailing newline that would count as a line
        let content = read_input(self.input.as_deref())?;
        let result = create_delivery_schedule(content.trim());

        let body = match self.format {
            OutputFormat::Text => result.clone()?,
            OutputFormat::Json => {
                let response = ScheduleResponse::from(result.clone());
                let mut json = serde_json::to_string_pretty(&response)?;
                json.push('\n');
                json
            }
        };
        write_output(self.output.as_deref(), &body)?;

        result?;
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let fallback_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // a second run() in the same process keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading booking request");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open file: {}", path.to_string_lossy()))
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read booking request from stdin")?;
            Ok(content)
        }
    }
}

fn write_output(path: Option<&Path>, body: &str) -> Result<(), Error> {
    match path {
        Some(path) => std::fs::write(path, body)
            .with_context(|| format!("Failed to write file: {}", path.to_string_lossy())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
