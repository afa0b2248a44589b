mod cli;
mod logging;

use clap::{Parser, Subcommand};
use cli::{CliError, CliResult};
use smak_core::{
    config::{self, Config},
    effect::SessionEnd,
    git::{CliGitProvider, EntriesKind, GitProvider},
    state::{BrowserState, Viewport},
};
use smak_tui::Theme;
use std::{path::PathBuf, process::ExitCode};

const AFTER_HELP: &str = "\
Interactive controls (defaults, see [keys] in the config file):
  up/down, k/j   Navigate
  enter          Check out a branch, view a commit, or confirm
  d              Toggle a branch for deletion
  m              Merge the branch under the cursor into another
  esc            Clear the selection or back out of the current step
  q              Quit";

#[derive(Parser)]
#[command(
    version,
    about = "Git interaction made easier",
    after_help = AFTER_HELP,
    arg_required_else_help = true
)]
struct Cli {
    /// Override path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        default_value = logging::DEFAULT_LOG_LEVEL,
        value_parser = logging::parse_level
    )]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage branches interactively
    B,
    /// Browse commits in the current branch
    C {
        #[command(subcommand)]
        action: Option<CommitAction>,
    },
}

#[derive(Subcommand)]
enum CommitAction {
    /// Stage all changes and amend them to the latest commit
    Am {
        /// Push with --force-with-lease after amending
        #[arg(short, long)]
        push: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = logging::setup_logging(cli.log_level) {
        eprintln!("Warning: logging disabled: {error:#}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::warn!("exiting with error: {}", error.message());
            cli::print_error(&error);
            ExitCode::from(error.code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(anyhow::Error::from)?;
    let repo_root = cli::require_repo_root(&cwd)?;
    let config = config::load_config(cli.config.as_deref())?;
    let git = CliGitProvider::new(repo_root, config.merge.unmerged());

    match cli.command {
        Commands::B => run_tui(&config, &git, EntriesKind::Branches),
        Commands::C { action: None } => run_tui(&config, &git, EntriesKind::Commits),
        Commands::C {
            action: Some(CommitAction::Am { push }),
        } => {
            println!("{}", cli::cmd_amend(&git, push)?);
            Ok(())
        }
    }
}

fn run_tui(config: &Config, git: &dyn GitProvider, kind: EntriesKind) -> CliResult<()> {
    let entries = git.load(kind).map_err(|e| cli::load_error(kind, &e))?;
    let state = BrowserState::new(entries, Viewport::default());
    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::init();
    let result = smak_tui::run(&mut terminal, state, git, &theme, &config.keys);
    ratatui::restore();

    match result? {
        SessionEnd::Quit => Ok(()),
        SessionEnd::CheckedOut(name) => {
            println!("Switched to branch '{name}'");
            Ok(())
        }
        SessionEnd::Failed(message) => Err(CliError::user(format!("Error: {message}"))),
    }
}
