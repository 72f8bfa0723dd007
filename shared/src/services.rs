//! Seams to the collaborators the client-side core depends on.
//!
//! Browser futures are `!Send`, so the async traits opt out of the `Send`
//! bound.

use async_trait::async_trait;

use crate::dto::auth::UserDto;
use crate::dto::registration::RegistrationOutcome;
use crate::error::Result;
use crate::models::leaderboard::TournamentStanding;
use crate::models::registration::RegistrationRecord;
use crate::models::tournament::Tournament;
use crate::notification::Notification;

/// Answers "who is signed in right now"
#[async_trait(?Send)]
pub trait SessionProvider {
    async fn current_user(&self) -> Option<UserDto>;
}

/// Read access to the tournament collection
#[async_trait(?Send)]
pub trait TournamentSource {
    /// The whole collection, unfiltered
    async fn list_tournaments(&self) -> Result<Vec<Tournament>>;

    /// Standings for one tournament, rank ascending
    async fn tournament_leaderboard(&self, tournament_id: &str) -> Result<Vec<TournamentStanding>>;
}

/// Write access to the registration collection
#[async_trait(?Send)]
pub trait RegistrationSink {
    /// Never fails outright; transport problems come back as `Other`
    async fn insert_registration(&self, record: &RegistrationRecord) -> RegistrationOutcome;
}

/// Displays transient messages
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
