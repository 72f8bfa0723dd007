use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::models::leaderboard::TournamentStanding;
use shared::models::tournament::Tournament;
use shared::services::TournamentSource;
use shared::SharedError;

use crate::api::api_url;
use crate::api::utils::error_message;

pub async fn list_tournaments() -> Result<Vec<Tournament>, String> {
    let response = Request::get(&api_url("/api/tournaments"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch tournaments: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let tournaments = response
        .json::<Vec<Tournament>>()
        .await
        .map_err(|e| format!("Failed to parse tournaments: {}", e))?;
    debug!("Fetched {} tournaments", tournaments.len());
    Ok(tournaments)
}

pub async fn tournament_leaderboard(tournament_id: &str) -> Result<Vec<TournamentStanding>, String> {
    let url = api_url(&format!(
        "/api/tournaments/{}/leaderboard",
        urlencoding::encode(tournament_id)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch leaderboard: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Vec<TournamentStanding>>()
        .await
        .map_err(|e| format!("Failed to parse leaderboard: {}", e))
}

/// Tournament collection served by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpTournamentSource;

#[async_trait(?Send)]
impl TournamentSource for HttpTournamentSource {
    async fn list_tournaments(&self) -> shared::Result<Vec<Tournament>> {
        list_tournaments().await.map_err(SharedError::Network)
    }

    async fn tournament_leaderboard(&self, tournament_id: &str) -> shared::Result<Vec<TournamentStanding>> {
        tournament_leaderboard(tournament_id).await.map_err(SharedError::Network)
    }
}
