use thiserror::Error;

use protars_core::errors::RecordError;

use super::config::{DecoyConfigError, DecoyType};

#[derive(Error, Debug)]
pub enum DecoyError {
    #[error("Decoy type {0} is not implemented")]
    UnsupportedDecoyType(DecoyType),
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
    #[error(transparent)]
    Config(#[from] DecoyConfigError),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type DecoyResult<T> = std::result::Result<T, DecoyError>;
