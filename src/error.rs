use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the vphys helpers.
#[derive(Error, Debug)]
pub enum VphysError {
    /// A caller-supplied argument is outside its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error, propagated unchanged.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Rendering or image encoding failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VphysError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn plot(message: impl Into<String>) -> Self {
        Self::Plot(message.into())
    }
}

pub type Result<T> = std::result::Result<T, VphysError>;

impl From<toml::ser::Error> for VphysError {
    fn from(e: toml::ser::Error) -> Self {
        VphysError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for VphysError {
    fn from(e: toml::de::Error) -> Self {
        VphysError::Config(e.to_string())
    }
}
