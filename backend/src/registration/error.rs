use thiserror::Error;
use crate::error::ApiError;

/// Failures that are not a registration outcome in their own right
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Tournament {0} not found")]
    TournamentNotFound(String),
    #[error("Registration store error: {0}")]
    Store(String),
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match &err {
            RegistrationError::TournamentNotFound(_) => ApiError::not_found(&err.to_string()),
            RegistrationError::Store(_) => ApiError::database_error(&err.to_string()),
        }
    }
}
