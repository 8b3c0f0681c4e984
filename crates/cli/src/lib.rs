pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hirerank_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use hirerank_core::errors::ApplicationError;
use tracing::Level;

use crate::commands::search::SearchArgs;
use crate::commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "hirerank",
    about = "Score, rank and shortlist job candidates",
    long_about = "Score candidates against a weighted six-factor policy, search and filter them, \
                  and build hiring recommendations from a JSON dataset.",
    after_help = "Examples:\n  hirerank rank --limit 10\n  hirerank search react --location austin \
                  --max-salary 90000\n  hirerank recommend --dataset candidates.json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a hirerank.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Path to the candidate dataset (JSON array)")]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List scored candidates by descending score")]
    Rank {
        #[arg(long, help = "Return at most this many candidates")]
        limit: Option<usize>,
    },
    #[command(about = "Search by name, location or skill and filter by attributes")]
    Search {
        #[arg(help = "Case-insensitive text matched against name, location and skills")]
        query: Option<String>,
        #[arg(long, help = "Location substring")]
        location: Option<String>,
        #[arg(long, help = "Minimum salary expectation, e.g. 60000 or $60,000")]
        min_salary: Option<String>,
        #[arg(long, help = "Maximum salary expectation, e.g. 90000 or $90,000")]
        max_salary: Option<String>,
        #[arg(long, help = "Skill substring")]
        skills: Option<String>,
    },
    #[command(about = "Top performers, best value picks and a diverse team with its budget")]
    Recommend,
    #[command(about = "Dashboard summary, location counts and salary histogram")]
    Stats,
    #[command(about = "Show the effective scoring weights and whether they total 100")]
    Weights,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Rank { .. } => "rank",
            Self::Search { .. } => "search",
            Self::Recommend => "recommend",
            Self::Stats => "stats",
            Self::Weights => "weights",
        }
    }
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                dataset_path: self.dataset.clone(),
                ..ConfigOverrides::default()
            },
        }
    }
}

/// Install the stderr subscriber; stdout carries the JSON result.
pub fn init_logging(config: &AppConfig) {
    let level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr);

    // A subscriber may already be installed when commands run in-process.
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Load configuration and run the selected command.
pub fn execute(cli: Cli) -> CommandResult {
    let name = cli.command.name();
    let config = match AppConfig::load(cli.load_options()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::from_error(&ApplicationError::from(error).into_interface(name));
        }
    };
    init_logging(&config);

    match cli.command {
        Command::Rank { limit } => commands::rank::run(&config, limit),
        Command::Search { query, location, min_salary, max_salary, skills } => {
            let args = SearchArgs { query, location, min_salary, max_salary, skills };
            commands::search::run(&config, &args)
        }
        Command::Recommend => commands::recommend::run(&config),
        Command::Stats => commands::stats::run(&config),
        Command::Weights => commands::weights::run(&config),
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let result = execute(cli);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", result.output).context("failed to write command output")?;
    Ok(ExitCode::from(result.exit_code))
}
