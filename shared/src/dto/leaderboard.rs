use serde::{Deserialize, Serialize};

use crate::models::leaderboard::{MatchRecord, PlayerScore, TournamentStanding};

/// Body of `GET /api/leaderboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    #[serde(default)]
    pub leaderboard: Vec<PlayerScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeaderboardResponse {
    pub fn ok(leaderboard: Vec<PlayerScore>) -> Self {
        Self {
            success: true,
            leaderboard,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            leaderboard: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Body of `GET /api/matches/{player}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MatchHistoryResponse {
    pub fn ok(matches: Vec<MatchRecord>) -> Self {
        Self {
            success: true,
            matches,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            matches: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Body of `GET /api/tournaments/{id}/leaderboard`, rank ascending
pub type TournamentLeaderboard = Vec<TournamentStanding>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failed_response_shape() {
        let json = serde_json::to_value(LeaderboardResponse::failed("store unavailable")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "leaderboard": [], "message": "store unavailable"})
        );
    }

    #[test]
    fn test_ok_response_omits_message() {
        let response = LeaderboardResponse::ok(vec![PlayerScore { player: "viper".to_string(), score: 120 }]);
        let json = serde_json::to_value(response).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["leaderboard"][0]["player"], "viper");
    }
}
