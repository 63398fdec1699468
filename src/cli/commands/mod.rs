//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its defaults from the [`Context`]
//! 2. Calls into [`crate::git`]
//! 3. Formats and displays output
//!
//! Handlers release every handle they open before returning.

mod completion;
mod config_cmd;
mod info;
mod init;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, set as config_set};
pub use info::info;
pub use init::init;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { path, bare } => init::init(ctx, &path, bare),
        Command::Info { json } => info::info(ctx, json),
        Command::Get { key, kind } => config_cmd::get(ctx, &key, kind),
        Command::Set { key, value, kind } => config_cmd::set(ctx, &key, &value, kind),
        Command::Completion { shell } => completion::completion(shell),
    }
}
