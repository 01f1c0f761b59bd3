use std::future::Future;

use folio_models::contact::{FieldId, FormSnapshot};
use folio_transport_contracts::SubmissionError;
use thiserror::Error;

pub mod draft;
pub mod submission_log;

/// Validation, draft persistence and the submit lifecycle of the contact form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Loads the saved draft and requests the form to be prefilled with it.
    /// Never validates.
    fn initialize(&self) -> impl Future<Output = FormSnapshot> + Send;

    /// Validates a single field and requests its error to be shown or
    /// cleared accordingly.
    fn validate_field(&self, field: FieldId, value: &str) -> bool;

    /// Validates every required field, surfacing all errors at once.
    fn validate_all(&self, snapshot: &FormSnapshot) -> bool;

    /// Handles a change of `field`. `snapshot` holds the values of all fields
    /// after the change and is saved as the new draft.
    fn field_input(&self, field: FieldId, snapshot: &FormSnapshot)
        -> impl Future<Output = ()> + Send;

    /// Validates and submits the form.
    ///
    /// The submit control is disabled for the duration of the submission and
    /// re-enabled on every path out of it. The draft is only cleared if the
    /// submission was accepted.
    fn submit(
        &self,
        snapshot: FormSnapshot,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    fn close_success_overlay(&self);

    fn state(&self) -> SubmitState;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The form contains invalid fields.")]
    Invalid,
    #[error("A submission is already in progress.")]
    InProgress,
    #[error("Failed to send message")]
    Send(#[source] SubmissionError),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_initialize(mut self, result: FormSnapshot) -> Self {
        self.expect_initialize()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_field_input(mut self, field: FieldId, snapshot: FormSnapshot) -> Self {
        self.expect_field_input()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(snapshot),
            )
            .return_once(|_, _| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_submit(
        mut self,
        snapshot: FormSnapshot,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(snapshot))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
