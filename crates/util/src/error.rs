use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UtilError {
    #[error("Size must be greater than 0")]
    InvalidChunkSize,
    #[error("Min value cannot be greater than max value")]
    InvalidRange,
}
