//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "appflow")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect, validate and format AWS AppFlow CloudFormation templates")]
pub struct Cli {
    /// Configuration file (defaults to an optional `appflow.toml` in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List supported resource types, or print the property table of one type
    Schema {
        /// CloudFormation type name (e.g. 'AWS::AppFlow::Flow')
        resource_type: Option<String>,
    },
    /// Check every AppFlow resource of a template; exits non-zero on any violation
    Validate {
        /// Template file (JSON)
        file: PathBuf,
    },
    /// Re-render every AppFlow resource of a template canonically
    Fmt {
        /// Template file (JSON)
        file: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
    /// Print the tree-inspector attributes of every AppFlow resource
    Inspect {
        /// Template file (JSON)
        file: PathBuf,
    },
}
