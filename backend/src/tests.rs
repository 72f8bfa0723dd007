//! In-memory repositories and fixtures shared by the controller and use case tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared::models::leaderboard::{MatchRecord, PlayerScore, TournamentStanding};
use shared::models::registration::{RegistrationRecord, RegistrationStatus};
use shared::models::tournament::{Participants, Tournament, TournamentStatus, TournamentType};
use shared::models::user::User;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::leaderboard::repository::LeaderboardRepository;
use crate::registration::repository::RegistrationRepository;
use crate::tournament::repository::TournamentRepository;
use crate::user::repository::UserRepository;

pub fn sample_tournament(id: &str, status: TournamentStatus, max: u32) -> Tournament {
    Tournament {
        id: id.to_string(),
        name: format!("Tournament {}", id),
        tournament_type: TournamentType::Squad,
        status,
        start_date: Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
        end_date: None,
        prize_pool: Some(50_000),
        entry_fee: Some(200),
        participants: Some(Participants { current: 0, max }),
        details: None,
        image_url: None,
    }
}

pub fn standing(tournament_id: &str, rank: u32, team_name: &str) -> TournamentStanding {
    TournamentStanding {
        tournament_id: tournament_id.to_string(),
        rank,
        team_name: team_name.to_string(),
        kills: 10 * rank,
        points: 100 - rank as i64,
        matches_played: 4,
    }
}

pub fn record(tournament_id: &str, team_name: &str, whatsapp: &str) -> RegistrationRecord {
    RegistrationRecord {
        tournament_id: tournament_id.to_string(),
        team_name: team_name.to_string(),
        player1_name: "Asha".to_string(),
        player2_name: "Bilal".to_string(),
        player3_name: "Chen".to_string(),
        player4_name: "Dev".to_string(),
        player5_name: None,
        player6_name: None,
        whatsapp_number: whatsapp.to_string(),
        registration_date: "2025-02-20T10:00:00.000Z".to_string(),
        status: RegistrationStatus::Registered,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, String> {
        let mut users = self.users.lock().await;
        user.id = format!("u{}", users.len() + 1);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> Result<Option<User>, String> {
        let mut users = self.users.lock().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.name = name.to_string();
            user.phone = phone.map(str::to_string);
            user.clone()
        }))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTournamentRepository {
    pub tournaments: Arc<Mutex<Vec<Tournament>>>,
}

impl InMemoryTournamentRepository {
    /// One open tournament `t1` with sixteen slots
    pub fn seeded() -> Self {
        Self {
            tournaments: Arc::new(Mutex::new(vec![sample_tournament("t1", TournamentStatus::Upcoming, 16)])),
        }
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn list_all(&self) -> Result<Vec<Tournament>, String> {
        Ok(self.tournaments.lock().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tournament>, String> {
        Ok(self.tournaments.lock().await.iter().find(|t| t.id == id).cloned())
    }

    async fn standings(&self, _tournament_id: &str) -> Result<Vec<TournamentStanding>, String> {
        Ok(Vec::new())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRegistrationRepository {
    pub records: Arc<Mutex<Vec<RegistrationRecord>>>,
    pub insert_error: Option<String>,
}

impl InMemoryRegistrationRepository {
    pub fn failing_with(message: &str) -> Self {
        Self {
            insert_error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn registrations_for(&self, tournament_id: &str) -> Result<Vec<RegistrationRecord>, String> {
        let records = self.records.lock().await;
        Ok(records.iter().filter(|r| r.tournament_id == tournament_id).cloned().collect())
    }

    async fn insert(&self, record: &RegistrationRecord) -> Result<(), String> {
        if let Some(message) = &self.insert_error {
            return Err(message.clone());
        }
        // Lets concurrent callers interleave between check and insert
        tokio::task::yield_now().await;
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLeaderboardRepository {
    pub matches: Arc<Mutex<Vec<MatchRecord>>>,
    pub fail: bool,
}

impl InMemoryLeaderboardRepository {
    pub fn with_matches(rows: &[(&str, i64)]) -> Self {
        let matches = rows
            .iter()
            .enumerate()
            .map(|(i, (player, score))| MatchRecord {
                id: format!("m{}", i + 1),
                player: player.to_string(),
                score: *score,
                tournament_id: None,
                played_at: None,
            })
            .collect();
        Self {
            matches: Arc::new(Mutex::new(matches)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryLeaderboardRepository {
    async fn global(&self) -> Result<Vec<PlayerScore>, String> {
        if self.fail {
            return Err("collection match not found".to_string());
        }
        let mut rows: Vec<PlayerScore> = self
            .matches
            .lock()
            .await
            .iter()
            .map(|m| PlayerScore { player: m.player.clone(), score: m.score })
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(rows)
    }

    async fn matches_for(&self, player: &str) -> Result<Vec<MatchRecord>, String> {
        if self.fail {
            return Err("collection match not found".to_string());
        }
        let matches = self.matches.lock().await;
        Ok(matches.iter().filter(|m| m.player == player).cloned().collect())
    }
}
