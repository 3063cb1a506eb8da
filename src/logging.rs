//! Tracing setup.
//!
//! The game owns stdout, so events go to the file named by the config and
//! nowhere else. Without a log path no subscriber is installed.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
