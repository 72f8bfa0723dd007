//! State machine behind the team registration modal.
//!
//! ```text
//! Idle ──begin_submit(valid)──▶ Submitting ──complete(Registered)──▶ Success
//!  ▲  └─begin_submit(invalid)─┘      │
//!  │                                 └──complete(failure)──▶ Failed(kind)
//!  └──────────── cancel ◀──────────────────────────────────────┘
//! ```
//!
//! `Failed` behaves like `Idle` for editing and resubmitting. The draft is kept
//! on every failure and cleared on success or cancel.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::dto::registration::RegistrationOutcome;
use crate::models::registration::{RegistrationDraft, RegistrationField, RegistrationRecord};
use crate::notification::Notification;
use crate::services::RegistrationSink;
use crate::validation::{validate_registration, ErrorMap};

/// Why the store refused a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    CapacityExceeded,
    DuplicateTeam,
    DuplicateContact,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(FailureKind),
}

/// A submit attempt that did not reach the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("the form has validation errors")]
    Invalid,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the registration has already been completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the form cannot change while a submission is in flight")]
    SubmissionInFlight,
    #[error("no submission is in flight")]
    NotSubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    tournament_id: String,
    draft: RegistrationDraft,
    errors: ErrorMap,
    phase: FormPhase,
}

impl RegistrationForm {
    pub fn new(tournament_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            draft: RegistrationDraft::default(),
            errors: BTreeMap::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn tournament_id(&self) -> &str {
        &self.tournament_id
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submit_enabled(&self) -> bool {
        !matches!(self.phase, FormPhase::Submitting | FormPhase::Success)
    }

    /// Updates one field and drops any error recorded against it
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }
        self.draft.set(field, value);
        self.errors.remove(&field);
        Ok(())
    }

    /// Validates the draft and, if it passes, moves to `Submitting`.
    ///
    /// The returned record is what must be handed to the store; the caller
    /// reports the store's answer through [`RegistrationForm::complete`].
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<RegistrationRecord, SubmitBlocked> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitBlocked::InFlight),
            FormPhase::Success => return Err(SubmitBlocked::Completed),
            FormPhase::Idle | FormPhase::Failed(_) => {}
        }

        let errors = validate_registration(&self.draft);
        if !errors.is_empty() {
            debug!(
                "Registration for {} blocked by {} invalid field(s)",
                self.tournament_id,
                errors.len()
            );
            self.errors = errors;
            self.phase = FormPhase::Idle;
            return Err(SubmitBlocked::Invalid);
        }

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        Ok(RegistrationRecord::from_draft(&self.tournament_id, &self.draft, now))
    }

    /// Applies the store's answer to an in-flight submission
    pub fn complete(&mut self, outcome: RegistrationOutcome) -> Result<Notification, FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        Ok(self.finish(outcome))
    }

    fn finish(&mut self, outcome: RegistrationOutcome) -> Notification {
        let notification = outcome.notification();
        self.phase = match outcome {
            RegistrationOutcome::Registered => {
                info!("Team '{}' registered for tournament {}", self.draft.team_name.trim(), self.tournament_id);
                self.draft = RegistrationDraft::default();
                self.errors.clear();
                FormPhase::Success
            }
            RegistrationOutcome::CapacityExceeded => FormPhase::Failed(FailureKind::CapacityExceeded),
            RegistrationOutcome::DuplicateTeam => FormPhase::Failed(FailureKind::DuplicateTeam),
            RegistrationOutcome::DuplicateContact => FormPhase::Failed(FailureKind::DuplicateContact),
            RegistrationOutcome::Other(message) => {
                warn!("Registration for {} failed: {}", self.tournament_id, message);
                FormPhase::Failed(FailureKind::Other(message))
            }
        };
        notification
    }

    /// Discards the draft. Refused while a submission is in flight, because the
    /// request cannot be withdrawn once sent.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }
        self.draft = RegistrationDraft::default();
        self.errors.clear();
        self.phase = FormPhase::Idle;
        Ok(())
    }

    /// Runs a whole submit against `sink`: validate, insert once, apply the outcome
    pub async fn submit<S>(&mut self, sink: &S, now: DateTime<Utc>) -> Result<Notification, SubmitBlocked>
    where
        S: RegistrationSink + ?Sized,
    {
        let record = self.begin_submit(now)?;
        let outcome = sink.insert_registration(&record).await;
        Ok(self.finish(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;
    use crate::validation::FieldErrorKind;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct RecordingSink {
        outcome: RegistrationOutcome,
        received: RefCell<Vec<RegistrationRecord>>,
    }

    impl RecordingSink {
        fn answering(outcome: RegistrationOutcome) -> Self {
            Self {
                outcome,
                received: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.received.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl RegistrationSink for RecordingSink {
        async fn insert_registration(&self, record: &RegistrationRecord) -> RegistrationOutcome {
            self.received.borrow_mut().push(record.clone());
            self.outcome.clone()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new("t1");
        form.set_field(RegistrationField::TeamName, "Night Owls").unwrap();
        form.set_field(RegistrationField::Player1, "Asha").unwrap();
        form.set_field(RegistrationField::Player2, "Bilal").unwrap();
        form.set_field(RegistrationField::Player3, "Chen").unwrap();
        form.set_field(RegistrationField::Player4, "Dev").unwrap();
        form.set_field(RegistrationField::WhatsappNumber, "98765 43210").unwrap();
        form
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_sink() {
        let sink = RecordingSink::answering(RegistrationOutcome::Registered);
        let mut form = RegistrationForm::new("t1");
        form.set_field(RegistrationField::Player1, "A").unwrap();
        form.set_field(RegistrationField::Player2, "B").unwrap();
        form.set_field(RegistrationField::Player3, "C").unwrap();
        form.set_field(RegistrationField::Player4, "D").unwrap();
        form.set_field(RegistrationField::WhatsappNumber, "12345").unwrap();

        assert_eq!(form.submit(&sink, now()).await, Err(SubmitBlocked::Invalid));
        assert_eq!(sink.calls(), 0);
        assert_eq!(form.phase(), &FormPhase::Idle);

        let kinds: Vec<_> = form.errors().iter().map(|(f, e)| (*f, e.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (RegistrationField::TeamName, FieldErrorKind::Required),
                (RegistrationField::WhatsappNumber, FieldErrorKind::InvalidFormat),
            ]
        );
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = RegistrationForm::new("t1");
        assert_eq!(form.begin_submit(now()), Err(SubmitBlocked::Invalid));
        assert!(form.errors().contains_key(&RegistrationField::TeamName));

        form.set_field(RegistrationField::TeamName, "Owls").unwrap();
        assert!(!form.errors().contains_key(&RegistrationField::TeamName));
        assert!(form.errors().contains_key(&RegistrationField::Player1));
    }

    #[test_log::test(tokio::test)]
    async fn test_capacity_failure_keeps_draft() {
        let sink = RecordingSink::answering(RegistrationOutcome::from_store_message(
            "P0001: Tournament is full",
        ));
        let mut form = filled_form();
        let before = form.draft().clone();

        let notification = form.submit(&sink, now()).await.unwrap();

        assert_eq!(form.phase(), &FormPhase::Failed(FailureKind::CapacityExceeded));
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Tournament is already full!");
        assert_eq!(form.draft(), &before);
        assert!(form.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_success_resets_draft() {
        let sink = RecordingSink::answering(RegistrationOutcome::Registered);
        let mut form = filled_form();

        let notification = form.submit(&sink, now()).await.unwrap();

        assert_eq!(notification, Notification::success("Registration successful!"));
        assert_eq!(form.phase(), &FormPhase::Success);
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());

        let sent = sink.received.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].whatsapp_number, "9876543210");
        assert_eq!(sent[0].registration_date, "2025-03-01T10:00:00.000Z");
    }

    #[test]
    fn test_second_click_while_submitting_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_submit(now()).is_ok());
        assert!(!form.is_submit_enabled());
        assert_eq!(form.begin_submit(now()), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn test_completed_form_cannot_resubmit() {
        let mut form = filled_form();
        form.begin_submit(now()).unwrap();
        form.complete(RegistrationOutcome::Registered).unwrap();
        assert_eq!(form.begin_submit(now()), Err(SubmitBlocked::Completed));
    }

    #[test]
    fn test_retry_after_duplicate_team() {
        let mut form = filled_form();
        form.begin_submit(now()).unwrap();
        let notification = form.complete(RegistrationOutcome::DuplicateTeam).unwrap();
        assert_eq!(notification.message, "This team is already registered for the tournament.");

        form.set_field(RegistrationField::TeamName, "Night Owls II").unwrap();
        let record = form.begin_submit(now()).unwrap();
        assert_eq!(record.team_name, "Night Owls II");
    }

    #[test_log::test]
    fn test_cancel_rejected_while_submitting() {
        let mut form = filled_form();
        form.begin_submit(now()).unwrap();
        assert_eq!(form.cancel(), Err(FormError::SubmissionInFlight));
        assert_eq!(
            form.set_field(RegistrationField::Player5, "Sub"),
            Err(FormError::SubmissionInFlight)
        );

        form.complete(RegistrationOutcome::Other("timeout".to_string())).unwrap();
        assert_eq!(form.cancel(), Ok(()));
        assert!(form.draft().is_empty());
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_complete_without_submission_is_rejected() {
        let mut form = filled_form();
        assert_eq!(
            form.complete(RegistrationOutcome::Registered),
            Err(FormError::NotSubmitting)
        );
    }
}
