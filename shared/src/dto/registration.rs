use serde::{Deserialize, Serialize};

use crate::notification::Notification;

/// Result of asking the store to insert a registration.
///
/// The backend decides the outcome from its own checks and returns it tagged,
/// so clients never have to inspect error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    Registered,
    CapacityExceeded,
    DuplicateTeam,
    DuplicateContact,
    Other(String),
}

impl RegistrationOutcome {
    /// Classifies a raw store error message.
    ///
    /// Stores that enforce capacity with a trigger and uniqueness with named
    /// constraints only report those as text.
    pub fn from_store_message(message: &str) -> Self {
        if message.contains("Tournament is full") {
            RegistrationOutcome::CapacityExceeded
        } else if message.contains("unique_team_per_tournament") {
            RegistrationOutcome::DuplicateTeam
        } else if message.contains("unique_whatsapp_per_tournament") {
            RegistrationOutcome::DuplicateContact
        } else {
            RegistrationOutcome::Other(message.to_string())
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered)
    }

    /// Text shown to the user for this outcome
    pub fn message(&self) -> String {
        match self {
            RegistrationOutcome::Registered => "Registration successful!".to_string(),
            RegistrationOutcome::CapacityExceeded => "Tournament is already full!".to_string(),
            RegistrationOutcome::DuplicateTeam => {
                "This team is already registered for the tournament.".to_string()
            }
            RegistrationOutcome::DuplicateContact => {
                "This WhatsApp number is already registered for the tournament.".to_string()
            }
            RegistrationOutcome::Other(message) => format!("Registration failed: {}", message),
        }
    }

    pub fn notification(&self) -> Notification {
        if self.is_registered() {
            Notification::success(self.message())
        } else {
            Notification::error(self.message())
        }
    }

    /// HTTP status the registration endpoint answers with
    pub fn status_code(&self) -> u16 {
        match self {
            RegistrationOutcome::Registered => 201,
            RegistrationOutcome::CapacityExceeded
            | RegistrationOutcome::DuplicateTeam
            | RegistrationOutcome::DuplicateContact => 409,
            RegistrationOutcome::Other(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("ERROR: Tournament is full", RegistrationOutcome::CapacityExceeded)]
    #[test_case(
        "duplicate key value violates unique constraint \"unique_team_per_tournament\"",
        RegistrationOutcome::DuplicateTeam
    )]
    #[test_case(
        "duplicate key value violates unique constraint \"unique_whatsapp_per_tournament\"",
        RegistrationOutcome::DuplicateContact
    )]
    #[test_case("timeout", RegistrationOutcome::Other("timeout".to_string()))]
    fn test_from_store_message(message: &str, expected: RegistrationOutcome) {
        assert_eq!(RegistrationOutcome::from_store_message(message), expected);
    }

    #[test]
    fn test_other_message_is_prefixed() {
        let outcome = RegistrationOutcome::Other("network down".to_string());
        assert_eq!(outcome.message(), "Registration failed: network down");
        assert_eq!(outcome.notification().kind, NotificationKind::Error);
    }

    #[test]
    fn test_wire_format_is_tagged() {
        let json = serde_json::to_value(RegistrationOutcome::DuplicateTeam).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "duplicate_team"}));

        let other: RegistrationOutcome =
            serde_json::from_value(serde_json::json!({"outcome": "other", "message": "boom"})).unwrap();
        assert_eq!(other, RegistrationOutcome::Other("boom".to_string()));
    }
}
