use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};
use crate::error::{Result, SharedError};
use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// An account in the `user` collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// ArangoDB document key, empty until the store assigns one
    #[serde(rename = "_key", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[validate(email)]
    pub email: String,

    /// Argon2 PHC string
    #[validate(length(min = 1))]
    pub password: String,

    /// Display name, empty until the player sets one
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user for insertion; the store assigns the key
    pub fn new_for_db(email: String, password_hash: String, created_at: DateTime<Utc>) -> Result<Self> {
        let user = Self {
            id: String::new(),
            email,
            password: password_hash,
            name: String::new(),
            phone: None,
            created_at,
        };
        user.validate_fields()?;
        Ok(user)
    }

    pub fn with_profile(mut self, name: impl Into<String>, phone: Option<String>) -> Self {
        self.name = name.into();
        self.phone = phone;
        self
    }

    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(&self.password) {
            Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok()
        } else {
            false
        }
    }
}
