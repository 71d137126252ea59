//! Configuration errors
//!
//! Everything that can go wrong happens before the first frame: the level
//! source is missing, unreadable, or empty. Steady-state play cannot fail.

/// Fatal problems with the level source
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed level data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Level source contains no levels")]
    NoLevels,
}
