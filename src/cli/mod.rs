//! cli
//!
//! Command-line interface layer for gitbind.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags with the settings file
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every repository or configuration access is a call
//! into [`crate::git`]; handlers only parse, dispatch and print.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::settings::Settings;
use crate::core::value::ValueKind;
use crate::ui::output::{self, Verbosity};

/// Everything a command handler needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Repository to operate on
    pub repo: PathBuf,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Default for `init --bare`
    pub bare: bool,
    /// Default accessor for `get`/`set`
    pub value_type: ValueKind,
}

impl Context {
    /// Build a context from parsed flags and loaded settings.
    ///
    /// Flags win over settings; settings win over built-in defaults.
    pub fn new(cli: &Cli, settings: &Settings) -> Result<Self> {
        let repo = match cli.repo.clone().or_else(|| settings.repo.clone()) {
            Some(path) => path,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        Ok(Self {
            repo,
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug || settings.debug()),
            bare: settings.bare(),
            value_type: settings.value_type(),
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let loaded = Settings::load().context("Failed to load settings")?;
    let ctx = Context::new(&cli, &loaded.settings)?;
    init_logging(ctx.verbosity);

    if let Some(path) = &loaded.loaded_from {
        output::debug(format!("settings loaded from {}", path.display()));
    }

    commands::dispatch(cli.command, &ctx)
}

/// Install the env_logger backend for library diagnostics.
///
/// `RUST_LOG` takes precedence over the level implied by the flags.
fn init_logging(verbosity: Verbosity) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.log_level());
    builder.parse_default_env();
    // A logger may already be installed when running inside tests.
    let _ = builder.try_init();
}
