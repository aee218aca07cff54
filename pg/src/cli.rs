//! CLI command definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use questionset::ParseMode;

/// PromptGen - guided prompt generator for student advice
#[derive(Debug, Parser)]
#[command(
    name = "pg",
    about = "Interactive prompt generator for student life questions",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Category document to read instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub categories: Option<PathBuf>,

    /// Category document parser (structured, scanner)
    #[arg(long, global = true, value_name = "MODE")]
    pub parse_mode: Option<ParseMode>,

    /// Never touch the clipboard
    #[arg(long, global = true)]
    pub no_clipboard: bool,

    /// Skip the retro loading effects
    #[arg(long, global = true)]
    pub no_effects: bool,

    /// Subcommand to execute (default: interactive session)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available categories
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate the category document and report skipped entries
    Check,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}
