//! env_logger setup
use env_logger::{Builder, Target};
use std::fs::File;

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Install the global logger
///
/// `RUST_LOG` takes precedence over the configured level. When a log file is
/// configured, output goes there so it does not scribble over the frames.
pub fn init(config: &LoggingConfig) -> Result<(), AppError> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.level);
    builder.parse_default_env();

    if let Some(path) = &config.file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
