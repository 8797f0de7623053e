use anyhow::Result;
use bitlet::areas::repository::Repository;
use bitlet::config::Config;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const MISSING_COMMAND: &str = "Please enter a command.";
const UNKNOWN_COMMAND: &str = "No command with that name exists.";
const INCORRECT_OPERANDS: &str = "Incorrect operands.";

#[derive(Parser)]
#[command(
    name = "bitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny version control system",
    long_about = "A Gitlet-style version control system, written in Rust. \
    It tracks flat snapshots of a working directory with commits, branches \
    and three-way merges, storing everything under .gitlet.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates .gitlet in the current directory with an initial commit on master."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Record the staged snapshot",
        long_about = "This command creates a new commit on the current branch from HEAD's files plus the staging area."
    )]
    Commit {
        #[arg(index = 1, default_value = "", help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file and, if tracked, stage its removal"
    )]
    Rm {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "log", about = "Show the first-parent history of HEAD")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file> restores a file from HEAD, \
        checkout <commit> -- <file> restores it from a commit, \
        and checkout <branch> switches to another branch."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name or a commit id")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<PathBuf>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            report_usage_error(err);
            return Ok(());
        }
    };
    let config = Config::load_from_env();
    bitlet::logging::init(&config);

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()), config)?;

    if let Err(err) = run(&repository, &cli.command) {
        tracing::debug!(error = ?err, "command failed");
        println!("{}", err);
    }

    Ok(())
}

/// Usage mistakes are reported like command failures: one line on stdout
fn report_usage_error(err: clap::Error) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ if std::env::args_os().len() <= 1 => println!("{}", MISSING_COMMAND),
        ErrorKind::InvalidSubcommand => println!("{}", UNKNOWN_COMMAND),
        kind => {
            tracing::debug!(?kind, "rejected command line");
            println!("{}", INCORRECT_OPERANDS);
        }
    }
}

fn run(repository: &Repository, command: &Commands) -> bitlet::errors::Result<()> {
    match command {
        Commands::Init => {
            repository.init()?;
        }
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message } => {
            repository.commit(message)?;
        }
        Commands::Rm { file } => repository.rm(file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(message)?,
        Commands::Status => repository.status()?,
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(file)?,
            (Some(commit), Some(file)) => repository.checkout_file_at(commit, file)?,
            (Some(branch), None) => repository.checkout_branch(branch)?,
            (None, None) => println!("{}", INCORRECT_OPERANDS),
        },
        Commands::Branch { name } => repository.branch(name)?,
        Commands::RmBranch { name } => repository.rm_branch(name)?,
        Commands::Reset { commit } => repository.reset(commit)?,
        Commands::Merge { branch } => {
            let outcome = repository.merge(branch)?;
            if let Some(notice) = outcome.notice() {
                println!("{}", notice);
            }
        }
    }

    Ok(())
}
