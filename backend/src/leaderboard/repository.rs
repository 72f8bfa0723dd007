use arangors::client::reqwest::ReqwestClient;
use arangors::Database;
use shared::models::leaderboard::{MatchRecord, PlayerScore};

#[derive(Clone)]
pub struct LeaderboardRepositoryImpl {
    pub db: Database<ReqwestClient>,
}

impl LeaderboardRepositoryImpl {
    pub fn new(db: Database<ReqwestClient>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// One row per recorded match, highest score first
    async fn global(&self) -> Result<Vec<PlayerScore>, String>;
    async fn matches_for(&self, player: &str) -> Result<Vec<MatchRecord>, String>;
}

#[async_trait::async_trait]
impl LeaderboardRepository for LeaderboardRepositoryImpl {
    async fn global(&self) -> Result<Vec<PlayerScore>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR m IN match SORT m.score DESC RETURN { player: m.player, score: m.score }")
            .build();
        self.db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch leaderboard: {}", e))
    }

    async fn matches_for(&self, player: &str) -> Result<Vec<MatchRecord>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR m IN match FILTER m.player == @player SORT m.played_at DESC RETURN m")
            .bind_var("player", player)
            .build();
        self.db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch matches for {}: {}", player, e))
    }
}
