use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Usage: {program} [file-name]")]
    Usage { program: String },

    #[error("cannot open log file {}: {source}", .path.display())]
    LogOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot install signal handler: {0}")]
    Signal(std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
