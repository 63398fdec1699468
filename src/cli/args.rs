//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--repo <path>`: Repository to operate on
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::value::ValueKind;

/// gitbind - libgit2 repositories and their configuration from the shell
#[derive(Parser, Debug)]
#[command(name = "gitbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to operate on (defaults to the settings file, then the
    /// current directory)
    #[arg(long, global = true)]
    pub repo: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new repository
    #[command(
        name = "init",
        long_about = "Create a new repository at PATH.\n\n\
            With --bare the repository has no working directory and PATH itself \
            becomes the git directory.",
        after_help = "\
EXAMPLES:
    gitbind init ./project
    gitbind init --bare /srv/git/project.git"
    )]
    Init {
        /// Where to create the repository
        path: PathBuf,

        /// Create a bare repository
        #[arg(long)]
        bare: bool,
    },

    /// Show where the repository lives
    Info {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a configuration value
    #[command(after_help = "\
EXAMPLES:
    gitbind get user.name
    gitbind get --type bool core.bare
    gitbind get --type int core.compression")]
    Get {
        /// Configuration key, e.g. user.name
        key: String,

        /// Accessor to read with
        #[arg(long = "type", value_enum)]
        kind: Option<ValueKind>,
    },

    /// Write a configuration value
    #[command(after_help = "\
EXAMPLES:
    gitbind set user.name \"Ada Lovelace\"
    gitbind set --type bool core.ignorecase true
    gitbind set --type int core.compression -- -1")]
    Set {
        /// Configuration key, e.g. user.name
        key: String,

        /// Value to store
        value: String,

        /// Accessor to write with
        #[arg(long = "type", value_enum)]
        kind: Option<ValueKind>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by `completion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
