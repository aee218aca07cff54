//! PromptGen - guided prompt generator for student advice
//!
//! CLI entry point: interactive session by default, plus `list` and `check`.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use promptgen::cli::{Cli, Command, OutputFormat};
use promptgen::clipboard;
use promptgen::config::Config;
use promptgen::effects::Effects;
use promptgen::interrupt;
use promptgen::session::{Session, TerminalInput};
use questionset::{Catalog, Category};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptgen")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("promptgen.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    interrupt::install()?;

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .apply_cli(&cli);
    info!(
        "PromptGen loaded config: categories={} parse-mode={}",
        config.categories_file.display(),
        config.parse_mode
    );

    let catalog = load_catalog(&config);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::List { format }) => cmd_list(&catalog, format),
        Some(Command::Check) => cmd_check(&config, &catalog),
        None => cmd_interactive(&config, catalog),
    }
}

/// Load the category document or end the process with status 1
fn load_catalog(config: &Config) -> Catalog {
    match questionset::load(&config.categories_file, config.parse_mode) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load categories: {}", e);
            println!("{} {}", "Error:".bright_red().bold(), e.to_string().red());
            std::process::exit(1);
        }
    }
}

/// Run the interactive session
fn cmd_interactive(config: &Config, catalog: Catalog) -> Result<()> {
    debug!("cmd_interactive: called");
    let session = Session::new(catalog, config.template())
        .with_clipboard(clipboard::detect(config.clipboard))
        .with_effects(Effects::new(config.effects));

    let mut input = TerminalInput::new()?;
    let outcome = session.run(&mut input)?;
    debug!(prompts = outcome.prompts, exit = ?outcome.exit, "cmd_interactive: done");
    Ok(())
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    categories: &'a [Category],
}

/// Print the categories as the menu numbers them
fn cmd_list(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    debug!(?format, "cmd_list: called");
    match format {
        OutputFormat::Text => {
            for (i, category) in catalog.sorted().iter().enumerate() {
                println!(
                    "{} {} {}",
                    format!("{}.", i + 1).bright_green().bold(),
                    category.name,
                    format!("({} questions)", category.question_count()).dimmed()
                );
            }
        }
        OutputFormat::Yaml => {
            let document = CatalogDocument {
                categories: &catalog.categories,
            };
            let yaml = serde_yaml::to_string(&document).context("Failed to serialize categories")?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

/// Report what the parser kept and what it dropped
fn cmd_check(config: &Config, catalog: &Catalog) -> Result<()> {
    debug!("cmd_check: called");
    let questions: usize = catalog.categories.iter().map(Category::question_count).sum();

    println!(
        "{} {} ({} parser)",
        "✓".green(),
        config.categories_file.display(),
        config.parse_mode
    );
    println!("  Categories: {}", catalog.len());
    println!("  Questions: {}", questions);

    if catalog.skipped.is_empty() {
        println!("  Skipped: 0");
    } else {
        println!(
            "  {} {}",
            "Skipped:".yellow(),
            format!("{} entries skipped due to malformed structure", catalog.skipped.len()).yellow()
        );
        for entry in &catalog.skipped {
            println!("    {} {}", "-".yellow(), entry);
        }
    }
    for warning in &catalog.warnings {
        println!("  {} {}", "⚠".bright_yellow(), warning.yellow());
    }
    Ok(())
}
