#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{fmt, inspect, schema, validate};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use appflow::domain::config::AppConfig;
use appflow::kernel::config::load_config;
use appflow_logger::Logger;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(cli.config.as_deref())?;
    let logger = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging, cli.verbose)?;
    debug!(file = logger.writes_to_file(), "Logger ready");

    match cli.command {
        AppCommands::Schema { resource_type } => schema::print_schema(resource_type.as_deref())?,
        AppCommands::Validate { file } => validate::validate_file(&file)?,
        AppCommands::Fmt { file, output } => fmt::format_file(&file, output.as_deref(), &config)?,
        AppCommands::Inspect { file } => inspect::inspect_file(&file)?,
    }

    Ok(())
}
