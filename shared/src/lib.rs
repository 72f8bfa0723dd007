pub mod models {
    pub mod contact;
    pub mod leaderboard;
    pub mod registration;
    pub mod tournament;
    pub mod user;
}

pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod leaderboard;
    pub mod registration;
}

pub mod error;
pub mod listing;
pub mod modal;
pub mod notification;
pub mod registration_form;
pub mod services;
pub mod validation;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    contact::{ContactField, ContactForm},
    leaderboard::{MatchRecord, PlayerScore, TournamentStanding},
    registration::{RegistrationDraft, RegistrationField, RegistrationRecord, RegistrationStatus},
    tournament::{Participants, Tournament, TournamentStatus, TournamentType},
    user::User,
};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserDto},
    common::ErrorResponse,
    leaderboard::{LeaderboardResponse, MatchHistoryResponse},
    registration::RegistrationOutcome,
};

pub use listing::{FilterConfig, PageView, SortKey, StatusFilter, TournamentStats, TypeFilter, PAGE_SIZE};
pub use modal::{ModalOrchestrator, ModalState, RegistrationRequest};
pub use notification::{Notification, NotificationKind};
pub use registration_form::{FailureKind, FormError, FormPhase, RegistrationForm, SubmitBlocked};
pub use services::{Notifier, RegistrationSink, SessionProvider, TournamentSource};
pub use validation::{ErrorMap, FieldError, FieldErrorKind};
