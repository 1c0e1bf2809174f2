use thiserror::Error;
use turfdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use turfdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

// Repository errors that have been wrapped by a use case
// are unwrapped again to keep their status.
impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl AppError {
    /// Any kind of "not found", either from a use case or from a repository.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Business(BError::Parameter(err)) => err.is_not_found(),
            Self::Business(BError::Repo(RepoError::NotFound)) => true,
            _ => false,
        }
    }
}
