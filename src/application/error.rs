// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain and store failures pass through untouched.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

/// Failure category, independent of the message carried with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidArgument,
    NotImplemented,
    Persistence,
    Infrastructure,
}

impl ApplicationError {
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::Validation(_)) => ErrorKind::Validation,
            Self::Domain(DomainError::NotFound(_)) => ErrorKind::NotFound,
            Self::Domain(DomainError::InvalidArgument(_)) => ErrorKind::InvalidArgument,
            Self::Domain(DomainError::NotImplemented(_)) => ErrorKind::NotImplemented,
            Self::Domain(DomainError::Persistence(_)) => ErrorKind::Persistence,
            Self::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Infrastructure(_) => None,
        }
    }
}
