use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong setting up an engine.
///
/// Once an engine exists, nothing it does can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}
