use arangors::client::reqwest::ReqwestClient;
use arangors::Database;
use shared::models::leaderboard::TournamentStanding;
use shared::models::tournament::Tournament;

#[derive(Clone)]
pub struct TournamentRepositoryImpl {
    pub db: Database<ReqwestClient>,
}

impl TournamentRepositoryImpl {
    pub fn new(db: Database<ReqwestClient>) -> Self {
        Self { db }
    }
}

/// Read access to tournaments and their standings; both are maintained outside this service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Tournament>, String>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tournament>, String>;
    async fn standings(&self, tournament_id: &str) -> Result<Vec<TournamentStanding>, String>;
}

#[async_trait::async_trait]
impl TournamentRepository for TournamentRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<Tournament>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR t IN tournament SORT t.start_date DESC RETURN t")
            .build();
        self.db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch tournaments: {}", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tournament>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR t IN tournament FILTER t._key == @id LIMIT 1 RETURN t")
            .bind_var("id", id)
            .build();
        let mut tournaments: Vec<Tournament> = self
            .db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch tournament {}: {}", id, e))?;
        Ok(tournaments.pop())
    }

    async fn standings(&self, tournament_id: &str) -> Result<Vec<TournamentStanding>, String> {
        let query = arangors::AqlQuery::builder()
            .query(
                "FOR s IN tournament_leaderboard \
                 FILTER s.tournament_id == @tournament_id \
                 SORT s.rank ASC \
                 RETURN s",
            )
            .bind_var("tournament_id", tournament_id)
            .build();
        self.db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch standings for {}: {}", tournament_id, e))
    }
}
