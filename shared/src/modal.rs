//! Which tournament modal is open, if any.
//!
//! At most one modal is open at a time and it refers to its tournament by id,
//! so a refreshed tournament snapshot never leaves a stale copy behind.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dto::auth::UserDto;
use crate::models::tournament::Tournament;
use crate::notification::{Notification, NotificationAction};
use crate::services::SessionProvider;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to register for tournaments";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "modal", content = "tournamentId", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    None,
    Details(String),
    Registration(String),
    Leaderboard(String),
}

impl ModalState {
    pub fn tournament_id(&self) -> Option<&str> {
        match self {
            ModalState::None => None,
            ModalState::Details(id) | ModalState::Registration(id) | ModalState::Leaderboard(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        *self != ModalState::None
    }
}

/// Answer to a request to open the registration modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRequest {
    Opened,
    LoginRequired(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalOrchestrator {
    state: ModalState,
}

impl ModalOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn open_details(&mut self, tournament_id: impl Into<String>) {
        self.state = ModalState::Details(tournament_id.into());
    }

    pub fn open_leaderboard(&mut self, tournament_id: impl Into<String>) {
        self.state = ModalState::Leaderboard(tournament_id.into());
    }

    /// Opens the registration modal if somebody is signed in.
    ///
    /// The session is looked up once per call. Without a user the current
    /// modal is left untouched and a login prompt is returned.
    pub async fn request_registration<P>(&mut self, tournament_id: &str, session: &P) -> RegistrationRequest
    where
        P: SessionProvider + ?Sized,
    {
        let user = session.current_user().await;
        self.request_registration_with(tournament_id, user.as_ref())
    }

    /// Same as [`ModalOrchestrator::request_registration`] for a caller that
    /// already resolved the session
    pub fn request_registration_with(&mut self, tournament_id: &str, user: Option<&UserDto>) -> RegistrationRequest {
        match user {
            Some(user) => {
                debug!("Opening registration for {} as {}", tournament_id, user.email);
                self.state = ModalState::Registration(tournament_id.to_string());
                RegistrationRequest::Opened
            }
            None => RegistrationRequest::LoginRequired(
                Notification::warning(LOGIN_REQUIRED_MESSAGE).with_action(NotificationAction::Login),
            ),
        }
    }

    /// The "Register now" button inside the details modal.
    ///
    /// Returns `None` when the details modal is not the one showing.
    pub fn register_from_details(&mut self, user: Option<&UserDto>) -> Option<RegistrationRequest> {
        match &self.state {
            ModalState::Details(id) => {
                let id = id.clone();
                Some(self.request_registration_with(&id, user))
            }
            _ => None,
        }
    }

    pub fn close(&mut self) {
        self.state = ModalState::None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.tournament_id()
    }

    /// Finds the referenced tournament in the current snapshot
    pub fn resolve<'a>(&self, tournaments: &'a [Tournament]) -> Option<&'a Tournament> {
        let id = self.selected()?;
        tournaments.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tournament::fixtures::tournament;
    use crate::models::tournament::{TournamentStatus, TournamentType};
    use crate::notification::NotificationKind;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingSession {
        user: Option<UserDto>,
        lookups: Cell<usize>,
    }

    impl CountingSession {
        fn new(user: Option<UserDto>) -> Self {
            Self { user, lookups: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for CountingSession {
        async fn current_user(&self) -> Option<UserDto> {
            self.lookups.set(self.lookups.get() + 1);
            self.user.clone()
        }
    }

    fn player() -> UserDto {
        UserDto {
            id: "u1".to_string(),
            email: "gamer@example.com".to_string(),
            name: String::new(),
            phone: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_signed_out_user_gets_login_prompt() {
        let session = CountingSession::new(None);
        let mut modals = ModalOrchestrator::new();

        let answer = modals.request_registration("t1", &session).await;

        assert_eq!(modals.state(), &ModalState::None);
        assert_eq!(session.lookups.get(), 1);
        match answer {
            RegistrationRequest::LoginRequired(notification) => {
                assert_eq!(notification.kind, NotificationKind::Warning);
                assert_eq!(notification.message, LOGIN_REQUIRED_MESSAGE);
                assert_eq!(notification.action, Some(NotificationAction::Login));
            }
            other => panic!("expected login prompt, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signed_in_user_opens_registration() {
        let session = CountingSession::new(Some(player()));
        let mut modals = ModalOrchestrator::new();

        assert_eq!(modals.request_registration("t1", &session).await, RegistrationRequest::Opened);
        assert_eq!(modals.state(), &ModalState::Registration("t1".to_string()));
        assert_eq!(session.lookups.get(), 1);
    }

    #[test]
    fn test_register_from_details_carries_selection() {
        let mut modals = ModalOrchestrator::new();
        assert_eq!(modals.register_from_details(Some(&player())), None);

        modals.open_details("t2");
        assert_eq!(
            modals.register_from_details(Some(&player())),
            Some(RegistrationRequest::Opened)
        );
        assert_eq!(modals.selected(), Some("t2"));
        assert_eq!(modals.state(), &ModalState::Registration("t2".to_string()));
    }

    #[test]
    fn test_register_from_details_signed_out_keeps_details_open() {
        let mut modals = ModalOrchestrator::new();
        modals.open_details("t2");
        let answer = modals.register_from_details(None);
        assert!(matches!(answer, Some(RegistrationRequest::LoginRequired(_))));
        assert_eq!(modals.state(), &ModalState::Details("t2".to_string()));
    }

    #[test]
    fn test_close_clears_selection() {
        let mut modals = ModalOrchestrator::new();
        modals.open_leaderboard("t3");
        modals.close();
        assert_eq!(modals.selected(), None);
        assert!(!modals.state().is_open());
    }

    #[test]
    fn test_resolve_looks_up_snapshot() {
        let snapshot = vec![
            tournament("t1", "Alpha", TournamentType::Solo, TournamentStatus::Upcoming, 1, None),
            tournament("t2", "Bravo", TournamentType::Duo, TournamentStatus::Ongoing, 2, None),
        ];
        let mut modals = ModalOrchestrator::new();
        modals.open_details("t2");
        assert_eq!(modals.resolve(&snapshot).map(|t| t.name.as_str()), Some("Bravo"));

        modals.open_details("gone");
        assert!(modals.resolve(&snapshot).is_none());
    }
}
