// src/logging.rs
use std::fs::{self, OpenOptions};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{CardFilterError, Result};

/// Route the `log` facade into a file. Binaries call this once at startup;
/// library code only ever uses the macros below.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CardFilterError::io(parent, e))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CardFilterError::io(path, e))?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
