//! config commands - Read or write a typed configuration value

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::value::{ConfigValue, ValueKind};
use crate::git::{Config, Repository};
use crate::ui::output;

fn open_config(ctx: &Context) -> Result<Config> {
    let repo = Repository::open(&ctx.repo)
        .with_context(|| format!("Failed to open repository at {}", ctx.repo.display()))?;
    // The configuration stays valid once the repository handle is gone.
    let config = repo.config().context("Failed to load repository config")?;
    repo.free();
    Ok(config)
}

/// Print a configuration value.
pub fn get(ctx: &Context, key: &str, kind: Option<ValueKind>) -> Result<()> {
    let kind = kind.unwrap_or(ctx.value_type);
    output::debug(format!("get {} as {}", key, kind));

    let config = open_config(ctx)?;
    let value = config
        .get(key, kind)
        .with_context(|| format!("Failed to read {}", key))?;
    config.free();

    output::value(value);
    Ok(())
}

/// Store a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str, kind: Option<ValueKind>) -> Result<()> {
    let kind = kind.unwrap_or(ctx.value_type);
    let value = ConfigValue::parse(kind, value)?;
    output::debug(format!("set {} = {} as {}", key, value, kind));

    let mut config = open_config(ctx)?;
    config
        .set(key, &value)
        .with_context(|| format!("Failed to set {}", key))?;
    config.free();

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}
