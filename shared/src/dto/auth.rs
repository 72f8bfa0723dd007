use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            created_at: Some(user.created_at),
        }
    }
}

/// Request for account registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub name: String,

    /// Optional Indian mobile number collected by the sign-up page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = "crate::validation::INDIAN_MOBILE_REGEX",
        message = "Please enter a valid 10-digit phone number"
    ))]
    pub phone: Option<String>,
}

/// Body of `PUT /api/auth/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = "crate::validation::INDIAN_MOBILE_REGEX",
        message = "Please enter a valid 10-digit Indian phone number starting with 6-9"
    ))]
    pub phone: Option<String>,
}

impl UpdateProfileRequest {
    /// Trims both fields and drops an empty phone
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
        }
    }
}

/// Request for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
}

/// Plain acknowledgement body, e.g. `{"message": "Registered"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
