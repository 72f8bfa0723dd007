use std::fmt;
use crate::error::ApiError;

#[derive(Debug, PartialEq, Eq)]
pub enum UserError {
    NotFound,
    InvalidPassword,
    AlreadyExists,
    Validation(String),
    DatabaseError(String),
    Internal(String),
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::NotFound => write!(f, "User not found"),
            UserError::InvalidPassword => write!(f, "Invalid password"),
            UserError::AlreadyExists => write!(f, "An account with this email already exists"),
            UserError::Validation(msg) => write!(f, "{}", msg),
            UserError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            UserError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => ApiError::not_found(&err.to_string()),
            UserError::InvalidPassword => ApiError::unauthorized(&err.to_string()),
            UserError::AlreadyExists => ApiError::conflict(&err.to_string()),
            UserError::Validation(msg) => ApiError::validation_error(&msg),
            UserError::DatabaseError(msg) => ApiError::database_error(&msg),
            UserError::Internal(msg) => ApiError::internal_error(&msg),
        }
    }
}
