//! info command - Show where the repository lives

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::git::Repository;
use crate::ui::output;

/// Print the repository's git dir, working directory and bare flag.
pub fn info(ctx: &Context, json: bool) -> Result<()> {
    let repo = Repository::open(&ctx.repo)
        .with_context(|| format!("Failed to open repository at {}", ctx.repo.display()))?;
    let info = repo.info();
    repo.free();

    if json {
        let text = serde_json::to_string_pretty(&info).context("Failed to serialize info")?;
        output::value(text);
        return Ok(());
    }

    output::value(format!("path: {}", info.path.display()));
    match &info.workdir {
        Some(workdir) => output::value(format!("workdir: {}", workdir.display())),
        None => output::value("workdir: (none)"),
    }
    output::value(format!("bare: {}", info.bare));
    Ok(())
}
