pub mod cli;
pub mod conflict;
pub mod layout;
pub mod manifest;
pub mod platform;
pub mod plugin;
pub mod scaffold;
pub mod template;

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Platform errors
    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    #[error("could not determine home directory")]
    HomeDirNotFound,

    // Request errors
    #[error("plugin name cannot be empty")]
    EmptyPluginName,

    #[error("invalid plugin name '{0}' (must be a single directory name)")]
    InvalidPluginName(String),

    #[error("unknown permission '{0}' (expected FilesystemRead, FilesystemWrite or HTTP)")]
    UnknownPermission(String),

    // Generation errors
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    // Prompt errors
    #[error("interrupted by user")]
    Interrupted,

    #[error("terminal input error: {0}")]
    Readline(#[source] rustyline::error::ReadlineError),
}

impl From<rustyline::error::ReadlineError> for Error {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        use rustyline::error::ReadlineError;

        match e {
            ReadlineError::Interrupted | ReadlineError::Eof => Error::Interrupted,
            other => Error::Readline(other),
        }
    }
}
