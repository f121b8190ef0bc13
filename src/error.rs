use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A root, or a directory below it, is missing or cannot be listed.
    #[error("Cannot access directory {}: {source}", .path.display())]
    PathAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched file could not be read as text while scoring.
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Report error: {0}")]
    Report(String),
}

impl Error {
    pub(crate) fn path_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::PathAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}
