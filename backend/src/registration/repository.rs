use arangors::client::reqwest::ReqwestClient;
use arangors::Database;
use shared::models::registration::RegistrationRecord;

#[derive(Clone)]
pub struct RegistrationRepositoryImpl {
    pub db: Database<ReqwestClient>,
}

impl RegistrationRepositoryImpl {
    pub fn new(db: Database<ReqwestClient>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn registrations_for(&self, tournament_id: &str) -> Result<Vec<RegistrationRecord>, String>;
    /// Stores the registration and bumps the tournament's participant counter
    async fn insert(&self, record: &RegistrationRecord) -> Result<(), String>;
}

#[async_trait::async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    async fn registrations_for(&self, tournament_id: &str) -> Result<Vec<RegistrationRecord>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR r IN tournament_registration FILTER r.tournament_id == @tournament_id RETURN r")
            .bind_var("tournament_id", tournament_id)
            .build();
        self.db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to fetch registrations for {}: {}", tournament_id, e))
    }

    async fn insert(&self, record: &RegistrationRecord) -> Result<(), String> {
        let record_value = serde_json::to_value(record)
            .map_err(|e| format!("Failed to serialize registration: {}", e))?;
        let query = arangors::AqlQuery::builder()
            .query(
                "LET t = DOCUMENT(\"tournament\", @tournament_id) \
                 INSERT @record INTO tournament_registration \
                 UPDATE t WITH { participants: { current: (t.participants.current || 0) + 1 } } IN tournament \
                 RETURN NEW._key",
            )
            .bind_var("tournament_id", record.tournament_id.as_str())
            .bind_var("record", record_value)
            .build();

        let _: Vec<serde_json::Value> = self
            .db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to store registration: {}", e))?;
        Ok(())
    }
}
