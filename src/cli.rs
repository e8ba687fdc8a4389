use std::{io, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::{
    errors::Result,
    git::{SystemRunner, get_top_level_path},
    orchestrator::{RunOptions, RunReport, run as run_pipeline},
    utils::print_info,
};

#[derive(Subcommand)]
enum Commands {
    /// Completion subcommand
    /// Print the shell completion script for the given shell.
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Commit every untracked file of a repository as a layered history:\n\
\t- configuration, schema and library files first,\n\
\t- then UI primitives (grouped), components, routes and the rest.")]
#[command(args_conflicts_with_subcommands = true)]
#[command(help_template = "{about}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "strata", version)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path inside the working tree to commit (defaults to the current directory).
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Dry run
    /// Show the commits that would be created without staging or committing anything.
    #[arg(short = 'n', long, default_value_t = false)]
    dry_run: bool,

    /// Verbose
    /// If passed, it will print more information about the operation.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// * If `PATH` is not inside a git working tree
/// * If the status query fails
pub fn run() -> Result<Option<RunReport>> {
    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "strata", &mut io::stdout());
        return Ok(None);
    }

    let root = get_top_level_path(&SystemRunner::new(&cli.path))?;

    if cli.verbose {
        print_info("Repository", &root.display().to_string());
    }

    let options = RunOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    run_pipeline(&SystemRunner::new(root), options).map(Some)
}
