use crate::serial::Error as SerialError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("failed to write log file: {0}")]
    LogWrite(std::io::Error),

    #[error("failed to write console: {0}")]
    ConsoleWrite(std::io::Error),

    #[error("error reading: {0}")]
    Serial(#[from] SerialError),
}

pub type Result<T> = std::result::Result<T, Error>;
