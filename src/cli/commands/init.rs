//! init command - Create a new repository

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::git::Repository;
use crate::ui::output;

/// Create a repository at `path`.
///
/// `bare` is OR-ed with the settings default.
pub fn init(ctx: &Context, path: &Path, bare: bool) -> Result<()> {
    let bare = bare || ctx.bare;
    output::debug(format!("initializing {} (bare: {})", path.display(), bare));

    let repo = Repository::init(path, bare)
        .with_context(|| format!("Failed to initialize repository at {}", path.display()))?;
    let git_dir = repo.path();
    repo.free();

    let kind = if bare { "bare " } else { "" };
    output::print(
        format!("Initialized empty {}repository in {}", kind, git_dir.display()),
        ctx.verbosity,
    );
    Ok(())
}
