//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use astro_schedule::config::Config;
use astro_schedule::core::models::{format_time_of_day, parse_time_of_day};
use astro_schedule::output::{OperationResult, OutputMode};
use astro_schedule::shell::Shell;

/// astro-schedule - Plan the day without overlaps
#[derive(Parser, Debug)]
#[command(
    name = "astro-schedule",
    version,
    about = "Daily task scheduler with conflict detection",
    long_about = "Plan one day of tasks from an interactive menu.\n\n\
                  Tasks are kept in start-time order and may never overlap.\n\
                  A task that collides with an existing one is rejected."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive schedule menu (default)
    Shell,

    /// Validate an HH:mm time string
    CheckTime {
        /// Time to check, e.g. 09:30
        time: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => shell(cli.config.as_deref(), output_mode),
        Command::CheckTime { time } => check_time(&time, output_mode),
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": astro_schedule::VERSION,
                    })
                );
            } else {
                println!("astro-schedule {}", astro_schedule::VERSION);
            }
            Ok(())
        }
    }
}

fn shell(config_path: Option<&std::path::Path>, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = Config::load(config_path)?;
    if mode == OutputMode::Json {
        // Keep stdout pure JSON; conflicts are reported in the result objects
        config.notifications.console = false;
    }

    let mut manager = config.build_manager();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut manager, mode, &config.shell).run(stdin.lock(), stdout.lock())
}

fn check_time(time: &str, mode: OutputMode) -> anyhow::Result<()> {
    let result = match parse_time_of_day(time) {
        Ok(parsed) => OperationResult::ok("check-time", format_time_of_day(parsed)),
        Err(err) => OperationResult::failed("check-time", err.to_string()),
    };
    let success = result.success;
    result.render(mode, &mut io::stdout())?;

    if !success {
        anyhow::bail!("invalid time: {time}");
    }
    Ok(())
}
