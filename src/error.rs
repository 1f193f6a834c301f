// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardFilterError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid options in {path}: {source}")]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid options: {0}")]
    OptionsJson(#[from] serde_json::Error),

    #[error("no card container matches `{0}`")]
    ContainerNotFound(String),

    #[error("no filter named `{0}`")]
    UnknownFilter(String),

    #[error("`{value}` is not an option of filter `{filter}`")]
    UnknownOption { filter: String, value: String },

    #[error("page {page} does not exist ({count} page(s))")]
    PageOutOfRange { page: usize, count: usize },

    #[error("invalid selection `{0}` (expected attribute=value)")]
    BadSelection(String),

    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CardFilterError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, CardFilterError>;
