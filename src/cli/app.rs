//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use super::commands;
use statsbot::config::DEFAULT_SITE;
use statsbot::output::OutputMode;

/// statsbot - Monitors and satisfies requests for subreddit stats
#[derive(Parser, Debug)]
#[command(
    name = "statsbot",
    version,
    arg_required_else_help = true,
    about = "Monitors and satisfies requests for subreddit stats",
    long_about = "Watch a subreddit for new submissions and act on their titles.\n\n\
                  Titles starting with [request] ask for a stats report.\n\
                  Titles starting with \"Subreddit Stats:\" are reports.\n\
                  Everything else is labeled OTHER."
)]
pub struct Cli {
    /// Subreddit to monitor
    #[arg(short = 'r', long, global = true, default_value = "subreddit_stats")]
    pub subreddit: String,

    /// Site profile from the config file
    #[arg(long, global = true, default_value = DEFAULT_SITE)]
    pub site: String,

    /// Config file (defaults to <config dir>/statsbot/config.toml)
    #[arg(long, global = true, env = "STATSBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monitor the subreddit until interrupted (Ctrl+C)
    Run,

    /// List the newest submissions that carry no label
    Unlabeled {
        /// How many of the newest submissions to inspect
        #[arg(short, long, default_value_t = 100)]
        limit: usize,
    },
}

/// Options shared by all commands
#[derive(Debug, Clone)]
pub struct Settings {
    /// Subreddit to operate on
    pub subreddit: String,
    /// Site profile name
    pub site: String,
    /// Config file path
    pub config: PathBuf,
    /// Output mode
    pub output: OutputMode,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        },
    };

    if let Err(err) = statsbot::logging::init(cli.debug) {
        eprintln!("Failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        },
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings {
        subreddit: cli.subreddit.trim_start_matches("/r/").trim_start_matches("r/").to_string(),
        site: cli.site,
        config: statsbot::paths::config_file(cli.config.as_deref()),
        output: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        },
    };

    match cli.command {
        Command::Run => commands::run(&settings),
        Command::Unlabeled { limit } => commands::unlabeled(&settings, limit),
    }
}
