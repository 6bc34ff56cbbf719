//! Application-level errors
use std::io;
use thiserror::Error;
use wire3d_core::RenderError;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Render thread panicked")]
    RenderThread,
}
