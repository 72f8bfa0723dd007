use arangors::client::reqwest::ReqwestClient;
use arangors::document::options::InsertOptions;
use arangors::Database;
use shared::models::user::User;

use crate::database::USER_COLLECTION;

#[derive(Clone)]
pub struct UserRepositoryImpl {
    pub db: Database<ReqwestClient>,
}

impl UserRepositoryImpl {
    pub fn new(db: Database<ReqwestClient>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, String>;
    async fn create(&self, user: User) -> Result<User, String>;
    /// Replaces name and phone; `None` when no account has this key
    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> Result<Option<User>, String>;
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR u IN user FILTER LOWER(u.email) == LOWER(@email) LIMIT 1 RETURN u")
            .bind_var("email", email)
            .build();
        let mut users: Vec<User> = self
            .db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to look up user by email: {}", e))?;
        Ok(users.pop())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, String> {
        let query = arangors::AqlQuery::builder()
            .query("FOR u IN user FILTER u._key == @id LIMIT 1 RETURN u")
            .bind_var("id", id)
            .build();
        let mut users: Vec<User> = self
            .db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to look up user {}: {}", id, e))?;
        Ok(users.pop())
    }

    async fn create(&self, user: User) -> Result<User, String> {
        let collection = self
            .db
            .collection(USER_COLLECTION)
            .await
            .map_err(|e| format!("Failed to get user collection: {}", e))?;

        let insert_options = InsertOptions::builder().return_new(true).build();
        let result = collection
            .create_document(user, insert_options)
            .await
            .map_err(|e| format!("Failed to create user: {}", e))?;

        result
            .new_doc()
            .cloned()
            .ok_or_else(|| "No document returned after creation".to_string())
    }

    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> Result<Option<User>, String> {
        let query = arangors::AqlQuery::builder()
            .query(
                "FOR u IN user FILTER u._key == @id \
                 UPDATE u WITH { name: @name, phone: @phone } IN user \
                 OPTIONS { keepNull: false } RETURN NEW",
            )
            .bind_var("id", id)
            .bind_var("name", name)
            .bind_var("phone", phone)
            .build();
        let mut users: Vec<User> = self
            .db
            .aql_query(query)
            .await
            .map_err(|e| format!("Failed to update profile {}: {}", id, e))?;
        Ok(users.pop())
    }
}
