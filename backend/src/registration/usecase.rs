use log::{debug, info, warn};
use shared::dto::registration::RegistrationOutcome;
use shared::models::registration::RegistrationRecord;
use shared::validation::{digits_only, validate_registration};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::registration::error::RegistrationError;
use crate::registration::repository::RegistrationRepository;
use crate::tournament::repository::TournamentRepository;

/// Serializes the capacity and uniqueness checks with the insert that follows them
#[derive(Clone, Default)]
pub struct RegistrationLock(Arc<Mutex<()>>);

#[async_trait::async_trait]
pub trait RegistrationUseCase: Send + Sync {
    async fn register(
        &self,
        tournament_id: &str,
        record: RegistrationRecord,
    ) -> Result<RegistrationOutcome, RegistrationError>;
}

pub struct RegistrationUseCaseImpl<T: TournamentRepository, R: RegistrationRepository> {
    pub tournaments: T,
    pub registrations: R,
    pub lock: RegistrationLock,
}

fn same_team(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[async_trait::async_trait]
impl<T, R> RegistrationUseCase for RegistrationUseCaseImpl<T, R>
where
    T: TournamentRepository,
    R: RegistrationRepository,
{
    async fn register(
        &self,
        tournament_id: &str,
        record: RegistrationRecord,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        if record.tournament_id != tournament_id {
            return Ok(RegistrationOutcome::Other(
                "Registration does not match the selected tournament".to_string(),
            ));
        }

        let errors = validate_registration(&record.to_draft());
        if let Some((field, error)) = errors.iter().next() {
            debug!("Rejected registration for {}: {} {}", tournament_id, field, error.message);
            return Ok(RegistrationOutcome::Other(error.message.clone()));
        }

        let tournament = self
            .tournaments
            .find_by_id(tournament_id)
            .await
            .map_err(RegistrationError::Store)?
            .ok_or_else(|| RegistrationError::TournamentNotFound(tournament_id.to_string()))?;

        if !tournament.status.accepts_registrations() {
            return Ok(RegistrationOutcome::Other(
                "Registration is closed for this tournament".to_string(),
            ));
        }

        let _guard = self.lock.0.lock().await;

        let existing = self
            .registrations
            .registrations_for(tournament_id)
            .await
            .map_err(RegistrationError::Store)?;

        let max = tournament.participants.map(|p| p.max).unwrap_or(0);
        if tournament.is_full() || (max > 0 && existing.len() >= max as usize) {
            info!("Tournament {} is full ({} registrations)", tournament_id, existing.len());
            return Ok(RegistrationOutcome::CapacityExceeded);
        }

        if existing.iter().any(|r| same_team(&r.team_name, &record.team_name)) {
            return Ok(RegistrationOutcome::DuplicateTeam);
        }

        let whatsapp = digits_only(&record.whatsapp_number);
        if existing.iter().any(|r| digits_only(&r.whatsapp_number) == whatsapp) {
            return Ok(RegistrationOutcome::DuplicateContact);
        }

        match self.registrations.insert(&record).await {
            Ok(()) => {
                info!("Registered team {} for tournament {}", record.team_name, tournament_id);
                Ok(RegistrationOutcome::Registered)
            }
            Err(e) => {
                warn!("Store rejected registration for {}: {}", tournament_id, e);
                Ok(RegistrationOutcome::from_store_message(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{record, sample_tournament, InMemoryRegistrationRepository};
    use crate::tournament::repository::MockTournamentRepository;
    use pretty_assertions::assert_eq;
    use shared::models::tournament::TournamentStatus;

    fn tournaments_with(status: TournamentStatus, max: u32) -> MockTournamentRepository {
        let mut repo = MockTournamentRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            if id == "t1" {
                Ok(Some(sample_tournament("t1", status, max)))
            } else {
                Ok(None)
            }
        });
        repo
    }

    fn usecase(
        status: TournamentStatus,
        max: u32,
        registrations: InMemoryRegistrationRepository,
    ) -> RegistrationUseCaseImpl<MockTournamentRepository, InMemoryRegistrationRepository> {
        RegistrationUseCaseImpl {
            tournaments: tournaments_with(status, max),
            registrations,
            lock: RegistrationLock::default(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_record() {
        let registrations = InMemoryRegistrationRepository::default();
        let uc = usecase(TournamentStatus::Upcoming, 16, registrations.clone());

        let outcome = uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::Registered);
        assert_eq!(registrations.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_team_is_case_insensitive() {
        let registrations = InMemoryRegistrationRepository::default();
        let uc = usecase(TournamentStatus::Upcoming, 16, registrations.clone());
        uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();

        let outcome = uc.register("t1", record("t1", " night owls", "9123456780")).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::DuplicateTeam);
        assert_eq!(registrations.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_whatsapp_number() {
        let uc = usecase(TournamentStatus::Upcoming, 16, InMemoryRegistrationRepository::default());
        uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();

        let outcome = uc.register("t1", record("t1", "Red Foxes", "9876543210")).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::DuplicateContact);
    }

    #[tokio::test]
    async fn test_capacity_exceeded() {
        let uc = usecase(TournamentStatus::Upcoming, 1, InMemoryRegistrationRepository::default());
        uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();

        let outcome = uc.register("t1", record("t1", "Red Foxes", "9123456780")).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::CapacityExceeded);
    }

    #[tokio::test]
    async fn test_closed_and_unknown_tournaments() {
        let uc = usecase(TournamentStatus::Completed, 16, InMemoryRegistrationRepository::default());
        let outcome = uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();
        assert_eq!(
            outcome,
            RegistrationOutcome::Other("Registration is closed for this tournament".to_string())
        );

        let err = uc.register("t9", record("t9", "Night Owls", "9876543210")).await.unwrap_err();
        assert_eq!(err, RegistrationError::TournamentNotFound("t9".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected_before_lookup() {
        let uc = RegistrationUseCaseImpl {
            tournaments: MockTournamentRepository::new(),
            registrations: InMemoryRegistrationRepository::default(),
            lock: RegistrationLock::default(),
        };

        let outcome = uc.register("t1", record("t1", "Night Owls", "12345")).await.unwrap();
        assert!(matches!(outcome, RegistrationOutcome::Other(_)));

        let outcome = uc.register("t1", record("t2", "Night Owls", "9876543210")).await.unwrap();
        assert!(matches!(outcome, RegistrationOutcome::Other(_)));
    }

    #[tokio::test]
    async fn test_store_error_text_is_classified() {
        let registrations = InMemoryRegistrationRepository::failing_with("ERROR: Tournament is full");
        let uc = usecase(TournamentStatus::Upcoming, 16, registrations);

        let outcome = uc.register("t1", record("t1", "Night Owls", "9876543210")).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::CapacityExceeded);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_respect_capacity() {
        let registrations = InMemoryRegistrationRepository::default();
        let uc = Arc::new(usecase(TournamentStatus::Upcoming, 1, registrations.clone()));

        let a = {
            let uc = uc.clone();
            tokio::spawn(async move { uc.register("t1", record("t1", "Night Owls", "9876543210")).await })
        };
        let b = {
            let uc = uc.clone();
            tokio::spawn(async move { uc.register("t1", record("t1", "Red Foxes", "9123456780")).await })
        };

        let outcomes = vec![a.await.unwrap().unwrap(), b.await.unwrap().unwrap()];
        assert_eq!(outcomes.iter().filter(|o| o.is_registered()).count(), 1);
        assert!(outcomes.contains(&RegistrationOutcome::CapacityExceeded));
        assert_eq!(registrations.records.lock().await.len(), 1);
    }
}
