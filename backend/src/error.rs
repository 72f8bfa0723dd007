use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(error: &str, message: &str, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status_code,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BAD_REQUEST", message, 400)
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::new("UNAUTHORIZED", message, 401)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NOT_FOUND", message, 404)
    }

    pub fn conflict(message: &str) -> Self {
        Self::new("CONFLICT", message, 409)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("INTERNAL_ERROR", message, 500)
    }

    pub fn database_error(message: &str) -> Self {
        Self::new("DATABASE_ERROR", message, 500)
    }

    pub fn validation_error(message: &str) -> Self {
        Self::new("VALIDATION_ERROR", message, 400)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = match actix_web::http::StatusCode::from_u16(self.status_code) {
            Ok(status) => status,
            Err(_) => {
                log::warn!("Invalid status code {}, defaulting to 500", self.status_code);
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        HttpResponse::build(status).json(self)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl From<arangors::ClientError> for ApiError {
    fn from(err: arangors::ClientError) -> Self {
        Self::database_error(&format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::bad_request(&format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation_error(&format!("Validation error: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::unauthorized(&format!("Invalid token: {}", err))
    }
}

impl From<shared::SharedError> for ApiError {
    fn from(err: shared::SharedError) -> Self {
        use shared::SharedError;
        match err {
            SharedError::Validation(msg) | SharedError::MissingField(msg) => Self::validation_error(&msg),
            SharedError::BadRequest(msg) | SharedError::Conversion(msg) => Self::bad_request(&msg),
            SharedError::NotFound(msg) => Self::not_found(&msg),
            SharedError::Unauthorized(msg) => Self::unauthorized(&msg),
            SharedError::Conflict(msg) | SharedError::InvalidState(msg) => Self::conflict(&msg),
            SharedError::Database(msg) => Self::database_error(&msg),
            SharedError::Network(msg) | SharedError::Internal(msg) => Self::internal_error(&msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::new("TEST_ERROR", "Test message", 400);
        assert_eq!(error.error, "TEST_ERROR");
        assert_eq!(error.message, "Test message");
        assert_eq!(error.status_code, 400);
    }

    #[test]
    fn test_helper_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code, 400);
        assert_eq!(ApiError::unauthorized("x").status_code, 401);
        assert_eq!(ApiError::not_found("x").status_code, 404);
        assert_eq!(ApiError::conflict("x").status_code, 409);
        assert_eq!(ApiError::internal_error("x").status_code, 500);
        assert_eq!(ApiError::database_error("x").error, "DATABASE_ERROR");
        assert_eq!(ApiError::validation_error("x").error, "VALIDATION_ERROR");
    }

    #[test]
    fn test_display_format() {
        let error = ApiError::bad_request("Test message");
        assert_eq!(format!("{}", error), "BAD_REQUEST: Test message");
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::conflict("taken").error_response();
        assert_eq!(response.status().as_u16(), 409);
    }

    #[test]
    fn test_invalid_status_falls_back_to_500() {
        let response = ApiError::new("WEIRD", "x", 1000).error_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_from_arangors_error() {
        let arango_error = arangors::ClientError::InvalidServer("test error".to_string());
        let api_error: ApiError = arango_error.into();

        assert_eq!(api_error.error, "DATABASE_ERROR");
        assert!(api_error.message.contains("Database error"));
        assert_eq!(api_error.status_code, 500);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let api_error: ApiError = json_error.into();

        assert_eq!(api_error.error, "BAD_REQUEST");
        assert!(api_error.message.contains("JSON error"));
    }

    #[test]
    fn test_from_validation_errors() {
        use validator::{ValidationError, ValidationErrors};

        let mut errors = ValidationErrors::new();
        let mut validation_error = ValidationError::new("test");
        validation_error.message = Some("Invalid field".into());
        errors.add("field", validation_error);

        let api_error: ApiError = errors.into();
        assert_eq!(api_error.error, "VALIDATION_ERROR");
        assert_eq!(api_error.status_code, 400);
    }

    #[test]
    fn test_from_jwt_error() {
        let jwt_error = jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature);
        let api_error: ApiError = jwt_error.into();
        assert_eq!(api_error.status_code, 401);
    }

    #[test]
    fn test_from_shared_error() {
        let api_error: ApiError = shared::SharedError::NotFound("tournament t9".to_string()).into();
        assert_eq!(api_error.status_code, 404);
        assert_eq!(api_error.message, "tournament t9");
    }
}
