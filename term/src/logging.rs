use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Logs go to a file since the terminal is in raw mode. Without a file nothing is logged.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    WriteLogger::init(
        level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("logger already initialized")?;

    log::info!("Logging at {} to {}", level, path.display());
    Ok(())
}
