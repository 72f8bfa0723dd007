use async_trait::async_trait;
use log::{debug, warn};
use shared::dto::registration::RegistrationOutcome;
use shared::models::registration::RegistrationRecord;
use shared::services::RegistrationSink;

use crate::api::api_url;
use crate::api::utils::{authenticated_post, error_message};

pub async fn insert_registration(record: &RegistrationRecord) -> RegistrationOutcome {
    let url = api_url(&format!(
        "/api/tournaments/{}/registrations",
        urlencoding::encode(&record.tournament_id)
    ));

    let request = match authenticated_post(&url).json(record) {
        Ok(request) => request,
        Err(e) => return RegistrationOutcome::Other(format!("Failed to serialize registration: {}", e)),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Registration request failed: {}", e);
            return RegistrationOutcome::Other(e.to_string());
        }
    };

    // Conflicts and rejected bodies still carry a tagged outcome
    if matches!(response.status(), 200..=299 | 400 | 409) {
        match response.json::<RegistrationOutcome>().await {
            Ok(outcome) => {
                debug!("Registration outcome for {}: {:?}", record.tournament_id, outcome);
                outcome
            }
            Err(e) => RegistrationOutcome::Other(format!("Failed to parse registration response: {}", e)),
        }
    } else {
        RegistrationOutcome::Other(error_message(response).await)
    }
}

/// Registration collection served by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpRegistrationSink;

#[async_trait(?Send)]
impl RegistrationSink for HttpRegistrationSink {
    async fn insert_registration(&self, record: &RegistrationRecord) -> RegistrationOutcome {
        insert_registration(record).await
    }
}
