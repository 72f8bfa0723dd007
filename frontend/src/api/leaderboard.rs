use gloo_net::http::Request;
use shared::dto::leaderboard::{LeaderboardResponse, MatchHistoryResponse};
use shared::models::leaderboard::{MatchRecord, PlayerScore};

use crate::api::api_url;

pub async fn global_leaderboard() -> Result<Vec<PlayerScore>, String> {
    let response = Request::get(&api_url("/api/leaderboard"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch leaderboard: {}", e))?;

    let body = response
        .json::<LeaderboardResponse>()
        .await
        .map_err(|e| format!("Failed to parse leaderboard: {}", e))?;

    if body.success {
        Ok(body.leaderboard)
    } else {
        Err(body.message.unwrap_or_else(|| "Failed to load leaderboard".to_string()))
    }
}

pub async fn match_history(player: &str) -> Result<Vec<MatchRecord>, String> {
    let url = api_url(&format!("/api/matches/{}", urlencoding::encode(player)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch matches: {}", e))?;

    let body = response
        .json::<MatchHistoryResponse>()
        .await
        .map_err(|e| format!("Failed to parse matches: {}", e))?;

    if body.success {
        Ok(body.matches)
    } else {
        Err(body.message.unwrap_or_else(|| "Failed to load matches".to_string()))
    }
}
