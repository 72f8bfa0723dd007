//! Pure form validation.
//!
//! Every validator takes its input by shared reference and returns an
//! [`ErrorMap`] holding only the failing fields. An empty map means the input
//! is valid. Rules are applied per field without short-circuiting, so a user
//! sees every problem at once.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::contact::{ContactField, ContactForm};
use crate::models::registration::{RegistrationDraft, RegistrationField};

lazy_static! {
    static ref LOOSE_PHONE_REGEX: Regex = Regex::new(r"^\+?[\d\s\-()]+$").unwrap();
    static ref LOOSE_EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
    pub(crate) static ref INDIAN_MOBILE_REGEX: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();
}

/// Number of digits a WhatsApp number must contain
pub const WHATSAPP_DIGITS: usize = 10;

/// Minimum length of a contact-form description
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Input cap on a contact-form description
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Minimum sign-up password length
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    Required,
    InvalidFormat,
    TooShort { min: usize },
    Mismatch,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Required => write!(f, "Required"),
            FieldErrorKind::InvalidFormat => write!(f, "InvalidFormat"),
            FieldErrorKind::TooShort { min } => write!(f, "TooShort({})", min),
            FieldErrorKind::Mismatch => write!(f, "Mismatch"),
        }
    }
}

/// A single failed rule with the message shown under the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn required(label: &str) -> Self {
        Self::new(FieldErrorKind::Required, format!("{} is required", label))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failing fields only; empty means valid
pub type ErrorMap<F = RegistrationField> = BTreeMap<F, FieldError>;

/// Strips every non-digit character
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_valid_whatsapp(value: &str) -> bool {
    digits_only(value).len() == WHATSAPP_DIGITS
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a team registration draft.
///
/// Substitutes (players 5 and 6) are never validated.
pub fn validate_registration(draft: &RegistrationDraft) -> ErrorMap {
    let mut errors = BTreeMap::new();

    let required = std::iter::once(RegistrationField::TeamName).chain(RegistrationField::REQUIRED_PLAYERS);
    for field in required {
        if is_blank(draft.get(field)) {
            errors.insert(field, FieldError::required(field.label()));
        }
    }

    let whatsapp = draft.get(RegistrationField::WhatsappNumber);
    if is_blank(whatsapp) {
        errors.insert(
            RegistrationField::WhatsappNumber,
            FieldError::required(RegistrationField::WhatsappNumber.label()),
        );
    } else if !is_valid_whatsapp(whatsapp) {
        errors.insert(
            RegistrationField::WhatsappNumber,
            FieldError::new(FieldErrorKind::InvalidFormat, "Please enter a valid 10-digit phone number"),
        );
    }

    errors
}

/// Validates the contact page form
pub fn validate_contact(form: &ContactForm) -> ErrorMap<ContactField> {
    let mut errors = BTreeMap::new();

    if is_blank(&form.name) {
        errors.insert(ContactField::Name, FieldError::required("Name"));
    }

    if is_blank(&form.whatsapp) {
        errors.insert(ContactField::Whatsapp, FieldError::required("WhatsApp number"));
    } else if !LOOSE_PHONE_REGEX.is_match(&form.whatsapp) {
        errors.insert(
            ContactField::Whatsapp,
            FieldError::new(FieldErrorKind::InvalidFormat, "Please enter a valid phone number"),
        );
    }

    if is_blank(&form.email) {
        errors.insert(ContactField::Email, FieldError::required("Email"));
    } else if !LOOSE_EMAIL_REGEX.is_match(&form.email) {
        errors.insert(
            ContactField::Email,
            FieldError::new(FieldErrorKind::InvalidFormat, "Please enter a valid email"),
        );
    }

    if is_blank(&form.subject) {
        errors.insert(ContactField::Subject, FieldError::required("Subject"));
    }

    if is_blank(&form.description) {
        errors.insert(ContactField::Description, FieldError::required("Description"));
    } else if form.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        errors.insert(
            ContactField::Description,
            FieldError::new(
                FieldErrorKind::TooShort { min: MIN_DESCRIPTION_CHARS },
                format!("Description must be at least {} characters", MIN_DESCRIPTION_CHARS),
            ),
        );
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignUpField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
}

/// Values collected by the sign-up page before they become a register request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Display name, optional at sign-up
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

/// Client-side sign-up checks; the server validates the request again
pub fn validate_sign_up(form: &SignUpForm) -> ErrorMap<SignUpField> {
    let mut errors = BTreeMap::new();

    if is_blank(&form.email) {
        errors.insert(SignUpField::Email, FieldError::required("Email"));
    } else if !LOOSE_EMAIL_REGEX.is_match(&form.email) {
        errors.insert(
            SignUpField::Email,
            FieldError::new(FieldErrorKind::InvalidFormat, "Please enter a valid email"),
        );
    }

    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.insert(
            SignUpField::Password,
            FieldError::new(
                FieldErrorKind::TooShort { min: MIN_PASSWORD_CHARS },
                format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
            ),
        );
    }

    if form.password != form.confirm_password {
        errors.insert(
            SignUpField::ConfirmPassword,
            FieldError::new(FieldErrorKind::Mismatch, "Passwords do not match"),
        );
    }

    if !INDIAN_MOBILE_REGEX.is_match(&form.phone) {
        errors.insert(
            SignUpField::Phone,
            FieldError::new(FieldErrorKind::InvalidFormat, "Please enter a valid 10-digit phone number"),
        );
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Phone,
}

/// Editable part of an account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
}

/// Name is required; the phone may be left empty but otherwise must be an Indian mobile number
pub fn validate_profile(form: &ProfileForm) -> ErrorMap<ProfileField> {
    let mut errors = BTreeMap::new();

    if is_blank(&form.name) {
        errors.insert(ProfileField::Name, FieldError::required("Name"));
    }

    let phone = form.phone.trim();
    if !phone.is_empty() && !INDIAN_MOBILE_REGEX.is_match(phone) {
        errors.insert(
            ProfileField::Phone,
            FieldError::new(
                FieldErrorKind::InvalidFormat,
                "Please enter a valid 10-digit Indian phone number starting with 6-9",
            ),
        );
    }

    errors
}
