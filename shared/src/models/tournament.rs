use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SharedError;

/// Team format of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    Solo,
    Duo,
    Squad,
}

impl TournamentType {
    pub const ALL: [TournamentType; 3] = [TournamentType::Solo, TournamentType::Duo, TournamentType::Squad];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Solo => "solo",
            TournamentType::Duo => "duo",
            TournamentType::Squad => "squad",
        }
    }

    /// Label used for the participant counter ("Players" for solo events)
    pub fn participant_label(&self) -> &'static str {
        match self {
            TournamentType::Solo => "Players",
            TournamentType::Duo | TournamentType::Squad => "Teams",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solo" => Ok(TournamentType::Solo),
            "duo" => Ok(TournamentType::Duo),
            "squad" => Ok(TournamentType::Squad),
            other => Err(SharedError::Conversion(format!("Unknown tournament type: {}", other))),
        }
    }
}

/// Lifecycle status of a tournament, maintained by the data store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 3] = [
        TournamentStatus::Upcoming,
        TournamentStatus::Ongoing,
        TournamentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Ongoing => "ongoing",
            TournamentStatus::Completed => "completed",
        }
    }

    /// Badge text shown on tournament cards
    pub fn badge(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "REGISTRATION OPEN",
            TournamentStatus::Ongoing => "IN PROGRESS",
            TournamentStatus::Completed => "COMPLETED",
        }
    }

    /// Only upcoming tournaments accept registrations
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, TournamentStatus::Upcoming)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "ongoing" => Ok(TournamentStatus::Ongoing),
            "completed" => Ok(TournamentStatus::Completed),
            other => Err(SharedError::Conversion(format!("Unknown tournament status: {}", other))),
        }
    }
}

/// Current and maximum number of registered participants (players or teams)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participants {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub max: u32,
}

/// A tournament as stored in the `tournament` collection.
///
/// Tournaments are created and updated outside this application; clients only
/// ever read a snapshot of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// ArangoDB document key
    #[serde(rename = "_key", alias = "id")]
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub tournament_type: TournamentType,

    pub status: TournamentStatus,

    pub start_date: DateTime<Utc>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Prize pool in whole rupees
    #[serde(default)]
    pub prize_pool: Option<u64>,

    /// Entry fee in whole rupees
    #[serde(default, alias = "entryFee")]
    pub entry_fee: Option<u64>,

    #[serde(default)]
    pub participants: Option<Participants>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

impl Tournament {
    /// Prize pool with a missing value treated as zero
    pub fn prize_or_zero(&self) -> u64 {
        self.prize_pool.unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        match self.participants {
            Some(p) => p.max > 0 && p.current >= p.max,
            None => false,
        }
    }

    pub fn spots_left(&self) -> Option<u32> {
        self.participants.map(|p| p.max.saturating_sub(p.current))
    }

    /// Whether the register action should be offered for this tournament
    pub fn is_open_for_registration(&self) -> bool {
        self.status.accepts_registrations() && !self.is_full()
    }
}
