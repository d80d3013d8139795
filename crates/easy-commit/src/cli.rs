//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// easy-commit - Conventional commits from an interactive wizard
#[derive(Parser)]
#[command(name = "easy-commit")]
#[command(version = VERSION)]
#[command(about = "Create conventional commits with an interactive terminal wizard")]
#[command(long_about = "Create conventional commits with an interactive terminal wizard.\n\nWithout --type and --message the wizard walks through type, description, scope, body, and breaking change, then previews the message before committing.\n\nWith both --type and --message the commit is validated and created directly.")]
pub struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: .easy-commit.toml in the current or home directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub commit: CommitArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for creating a commit
#[derive(Args, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Commit type (feat, fix, docs, ...)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub commit_type: Option<String>,

    /// Commit description
    #[arg(short, long)]
    pub message: Option<String>,

    /// Commit scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Mark as a breaking change
    #[arg(short, long)]
    pub breaking: bool,

    /// Commit body
    #[arg(long)]
    pub body: Option<String>,

    /// Force the interactive wizard
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the message instead of committing
    #[arg(long)]
    pub dry_run: bool,
}

impl CommitArgs {
    /// The wizard runs when asked for or when type or message is missing
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.commit_type.is_none() || self.message.is_none()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .easy-commit.toml to the current directory
    #[command(long_about = "Write a default .easy-commit.toml to the current directory.\n\nThe file documents every setting with its default value.")]
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List the allowed commit types
    Types,

    /// Show the message of the last commit
    Last,
}

/// Parse CLI arguments
pub fn parse() -> Cli {
    Cli::parse()
}
