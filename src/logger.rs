use anyhow::Result;
use env_logger::{Builder, Env};

/// Installs `env_logger`. `RUST_LOG` wins over the level picked from `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;

    Ok(())
}
