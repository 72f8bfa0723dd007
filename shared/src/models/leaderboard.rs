use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the global leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: String,
    pub score: i64,
}

/// A team's standing inside a single tournament, as kept in `tournament_leaderboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentStanding {
    pub tournament_id: String,
    pub rank: u32,
    pub team_name: String,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub matches_played: u32,
}

impl TournamentStanding {
    /// Podium positions get highlighted rows
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

/// A single recorded match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "_key", alias = "id", default)]
    pub id: String,
    pub player: String,
    pub score: i64,
    #[serde(default)]
    pub tournament_id: Option<String>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}
