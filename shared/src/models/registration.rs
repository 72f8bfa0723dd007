use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::digits_only;

/// Form fields of a team registration, named the way the error map reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    TeamName,
    Player1,
    Player2,
    Player3,
    Player4,
    Player5,
    Player6,
    WhatsappNumber,
}

impl RegistrationField {
    /// The four players every squad must name
    pub const REQUIRED_PLAYERS: [RegistrationField; 4] = [
        RegistrationField::Player1,
        RegistrationField::Player2,
        RegistrationField::Player3,
        RegistrationField::Player4,
    ];

    pub const SUBSTITUTES: [RegistrationField; 2] = [RegistrationField::Player5, RegistrationField::Player6];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationField::TeamName => "teamName",
            RegistrationField::Player1 => "player1",
            RegistrationField::Player2 => "player2",
            RegistrationField::Player3 => "player3",
            RegistrationField::Player4 => "player4",
            RegistrationField::Player5 => "player5",
            RegistrationField::Player6 => "player6",
            RegistrationField::WhatsappNumber => "whatsappNumber",
        }
    }

    /// Human label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationField::TeamName => "Team name",
            RegistrationField::Player1 => "Player 1 name",
            RegistrationField::Player2 => "Player 2 name",
            RegistrationField::Player3 => "Player 3 name",
            RegistrationField::Player4 => "Player 4 name",
            RegistrationField::Player5 => "Player 5 name",
            RegistrationField::Player6 => "Player 6 name",
            RegistrationField::WhatsappNumber => "WhatsApp number",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress, unsubmitted registration form data.
///
/// Values are kept exactly as typed; trimming and normalisation happen when a
/// [`RegistrationRecord`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub team_name: String,
    pub player1: String,
    pub player2: String,
    pub player3: String,
    pub player4: String,
    pub player5: String,
    pub player6: String,
    pub whatsapp_number: String,
}

impl RegistrationDraft {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::TeamName => &self.team_name,
            RegistrationField::Player1 => &self.player1,
            RegistrationField::Player2 => &self.player2,
            RegistrationField::Player3 => &self.player3,
            RegistrationField::Player4 => &self.player4,
            RegistrationField::Player5 => &self.player5,
            RegistrationField::Player6 => &self.player6,
            RegistrationField::WhatsappNumber => &self.whatsapp_number,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegistrationField::TeamName => self.team_name = value,
            RegistrationField::Player1 => self.player1 = value,
            RegistrationField::Player2 => self.player2 = value,
            RegistrationField::Player3 => self.player3 = value,
            RegistrationField::Player4 => self.player4 = value,
            RegistrationField::Player5 => self.player5 = value,
            RegistrationField::Player6 => self.player6 = value,
            RegistrationField::WhatsappNumber => self.whatsapp_number = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Registered,
}

/// A submitted registration, as written to `tournament_registration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub tournament_id: String,
    pub team_name: String,
    pub player1_name: String,
    pub player2_name: String,
    pub player3_name: String,
    pub player4_name: String,
    #[serde(default)]
    pub player5_name: Option<String>,
    #[serde(default)]
    pub player6_name: Option<String>,
    /// Digits only
    pub whatsapp_number: String,
    /// ISO-8601 submission timestamp
    pub registration_date: String,
    #[serde(default)]
    pub status: RegistrationStatus,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RegistrationRecord {
    /// Builds the record for a draft that has already passed validation
    pub fn from_draft(tournament_id: &str, draft: &RegistrationDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            team_name: draft.team_name.trim().to_string(),
            player1_name: draft.player1.trim().to_string(),
            player2_name: draft.player2.trim().to_string(),
            player3_name: draft.player3.trim().to_string(),
            player4_name: draft.player4.trim().to_string(),
            player5_name: optional(&draft.player5),
            player6_name: optional(&draft.player6),
            whatsapp_number: digits_only(&draft.whatsapp_number),
            registration_date: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: RegistrationStatus::Registered,
        }
    }

    /// Reconstructs the form values, used by the server to re-run validation
    pub fn to_draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            team_name: self.team_name.clone(),
            player1: self.player1_name.clone(),
            player2: self.player2_name.clone(),
            player3: self.player3_name.clone(),
            player4: self.player4_name.clone(),
            player5: self.player5_name.clone().unwrap_or_default(),
            player6: self.player6_name.clone().unwrap_or_default(),
            whatsapp_number: self.whatsapp_number.clone(),
        }
    }
}
