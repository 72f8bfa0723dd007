use arangors::client::reqwest::ReqwestClient;
use arangors::{Connection, Database};
use log::info;
use shared::{Result, SharedError};

use crate::config::DatabaseConfig;

pub const USER_COLLECTION: &str = "user";
pub const TOURNAMENT_COLLECTION: &str = "tournament";
pub const REGISTRATION_COLLECTION: &str = "tournament_registration";
pub const STANDINGS_COLLECTION: &str = "tournament_leaderboard";
pub const MATCH_COLLECTION: &str = "match";

pub const COLLECTIONS: [&str; 5] = [
    USER_COLLECTION,
    TOURNAMENT_COLLECTION,
    REGISTRATION_COLLECTION,
    STANDINGS_COLLECTION,
    MATCH_COLLECTION,
];

pub async fn connect(config: &DatabaseConfig) -> Result<Database<ReqwestClient>> {
    let conn = Connection::establish_basic_auth(&config.url, &config.username, &config.password)
        .await
        .map_err(|e| SharedError::Database(format!("Failed to connect to ArangoDB at {}: {}", config.url, e)))?;

    conn.db(&config.name)
        .await
        .map_err(|e| SharedError::Database(format!("Failed to open database {}: {}", config.name, e)))
}

/// Creates any missing document collection
pub async fn ensure_collections(db: &Database<ReqwestClient>) -> Result<()> {
    for name in COLLECTIONS {
        if db.collection(name).await.is_err() {
            info!("Creating missing collection {}", name);
            db.create_collection(name).await.map_err(|e| {
                SharedError::Database(format!("Failed to create collection {}: {}", name, e))
            })?;
        }
    }
    Ok(())
}
