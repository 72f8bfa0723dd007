use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl actix_web::ResponseError for SharedError {
    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            SharedError::Validation(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::NotFound(_) => actix_web::HttpResponse::NotFound().json(self),
            SharedError::Unauthorized(_) => actix_web::HttpResponse::Unauthorized().json(self),
            SharedError::BadRequest(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::Conflict(_) => actix_web::HttpResponse::Conflict().json(self),
            SharedError::Database(_) => actix_web::HttpResponse::InternalServerError().json(self),
            SharedError::Conversion(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::Network(_) => actix_web::HttpResponse::BadGateway().json(self),
            SharedError::InvalidState(_) => actix_web::HttpResponse::Conflict().json(self),
            SharedError::Internal(_) => actix_web::HttpResponse::InternalServerError().json(self),
            SharedError::MissingField(_) => actix_web::HttpResponse::BadRequest().json(self),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SharedError::NotFound("tournament/42".to_string()).to_string(),
            "Not found: tournament/42"
        );
        assert_eq!(
            SharedError::InvalidState("submit already in flight".to_string()).to_string(),
            "Invalid state: submit already in flight"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Conversion(_)));
    }

    #[test]
    fn test_serde_round_trip_keeps_variant() {
        let err = SharedError::Conflict("team name taken".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: SharedError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_response_status_codes() {
        use actix_web::ResponseError;
        assert_eq!(SharedError::Validation("x".into()).error_response().status(), 400);
        assert_eq!(SharedError::Unauthorized("x".into()).error_response().status(), 401);
        assert_eq!(SharedError::NotFound("x".into()).error_response().status(), 404);
        assert_eq!(SharedError::Conflict("x".into()).error_response().status(), 409);
        assert_eq!(SharedError::Database("x".into()).error_response().status(), 500);
    }
}
