use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use folio_core_contact_contracts::{
    draft::ContactDraftService, submission_log::ContactSubmissionLogService,
    ContactFeatureService, ContactSubmitError, SubmitState,
};
use folio_models::contact::{validate, FieldId, FormSnapshot, SubmissionRecord};
use folio_presentation_contracts::PresentationService;
use folio_shared_contracts::time::TimeService;
use folio_transport_contracts::{SubmissionError, SubmissionTransport};
use tracing::{debug, warn};

pub mod draft;
pub mod submission_log;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Presentation, Transport, Time, Draft, SubmissionLog> {
    presentation: Presentation,
    transport: Transport,
    time: Time,
    draft: Draft,
    submission_log: SubmissionLog,
    config: ContactFeatureConfig,
    submitting: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Label of the idle submit control.
    pub submit_label: Arc<str>,
    /// Label shown on the submit control while a submission is pending.
    pub pending_label: Arc<str>,
    /// Upper bound for a single transport call.
    pub submit_timeout: Option<Duration>,
}

impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            submit_label: "Send Message".into(),
            pending_label: "Sending...".into(),
            submit_timeout: None,
        }
    }
}

impl<Presentation, Transport, Time, Draft, SubmissionLog>
    ContactFeatureServiceImpl<Presentation, Transport, Time, Draft, SubmissionLog>
{
    pub fn new(
        presentation: Presentation,
        transport: Transport,
        time: Time,
        draft: Draft,
        submission_log: SubmissionLog,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            presentation,
            transport,
            time,
            draft,
            submission_log,
            config,
            submitting: Default::default(),
        }
    }
}

impl<Presentation, Transport, Time, Draft, SubmissionLog> ContactFeatureService
    for ContactFeatureServiceImpl<Presentation, Transport, Time, Draft, SubmissionLog>
where
    Presentation: PresentationService,
    Transport: SubmissionTransport,
    Time: TimeService,
    Draft: ContactDraftService,
    SubmissionLog: ContactSubmissionLogService,
{
    #[tracing::instrument(skip(self))]
    async fn initialize(&self) -> FormSnapshot {
        let draft = self.draft.load_draft().await;
        self.presentation.prefill_fields(&draft);
        draft
    }

    #[tracing::instrument(skip(self, value))]
    fn validate_field(&self, field: FieldId, value: &str) -> bool {
        match validate(field, value) {
            Ok(()) => {
                self.presentation.clear_field_error(field);
                true
            }
            Err(err) => {
                debug!(%field, "invalid: {err}");
                self.presentation.show_field_error(field, &err.to_string());
                false
            }
        }
    }

    #[tracing::instrument(skip_all)]
    fn validate_all(&self, snapshot: &FormSnapshot) -> bool {
        FieldId::VALIDATED
            .map(|field| self.validate_field(field, snapshot.get(field)))
            .into_iter()
            .all(|valid| valid)
    }

    #[tracing::instrument(skip(self, snapshot))]
    async fn field_input(&self, field: FieldId, snapshot: &FormSnapshot) {
        if field.is_required() {
            self.presentation.clear_field_error(field);
        }
        self.draft.save_draft(snapshot).await;
    }

    #[tracing::instrument(skip_all)]
    async fn submit(&self, snapshot: FormSnapshot) -> Result<(), ContactSubmitError> {
        if self.state() == SubmitState::Submitting {
            debug!("submission already in progress");
            return Err(ContactSubmitError::InProgress);
        }

        if !self.validate_all(&snapshot) {
            return Err(ContactSubmitError::Invalid);
        }

        let Some(_guard) = SubmittingGuard::acquire(
            &self.presentation,
            &self.config,
            &self.submitting,
        ) else {
            return Err(ContactSubmitError::InProgress);
        };

        let record = SubmissionRecord {
            snapshot,
            timestamp: self.time.now(),
        };

        match self.deliver(record.clone()).await {
            Ok(()) => {
                debug!("submission accepted");
                if let Err(err) = self.submission_log.append(&record).await {
                    warn!("Failed to record submission: {err:#}");
                }
                self.presentation.show_success_overlay();
                self.presentation.reset_fields();
                self.draft.clear_draft().await;
                Ok(())
            }
            Err(err) => {
                warn!("Submission failed: {err}");
                self.presentation.show_failure_notice(&err.to_string());
                Err(ContactSubmitError::Send(err))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn close_success_overlay(&self) {
        self.presentation.hide_success_overlay();
    }

    fn state(&self) -> SubmitState {
        if self.submitting.load(Ordering::Acquire) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }
}

impl<Presentation, Transport, Time, Draft, SubmissionLog>
    ContactFeatureServiceImpl<Presentation, Transport, Time, Draft, SubmissionLog>
where
    Transport: SubmissionTransport,
{
    async fn deliver(&self, record: SubmissionRecord) -> Result<(), SubmissionError> {
        let submission = self.transport.submit(record);
        match self.config.submit_timeout {
            Some(timeout) => tokio::time::timeout(timeout, submission)
                .await
                .unwrap_or(Err(SubmissionError::Timeout)),
            None => submission.await,
        }
    }
}

/// Holds the submit control disabled. Dropping the guard, including when the
/// submission future itself is dropped, returns the form to idle.
struct SubmittingGuard<'a, Presentation: PresentationService> {
    presentation: &'a Presentation,
    config: &'a ContactFeatureConfig,
    submitting: &'a AtomicBool,
}

impl<'a, Presentation: PresentationService> SubmittingGuard<'a, Presentation> {
    fn acquire(
        presentation: &'a Presentation,
        config: &'a ContactFeatureConfig,
        submitting: &'a AtomicBool,
    ) -> Option<Self> {
        submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        debug!("submitting");
        presentation.set_submit_enabled(false);
        presentation.set_submit_label(&config.pending_label);

        Some(Self {
            presentation,
            config,
            submitting,
        })
    }
}

impl<Presentation: PresentationService> Drop for SubmittingGuard<'_, Presentation> {
    fn drop(&mut self) {
        self.presentation.set_submit_enabled(true);
        self.presentation.set_submit_label(&self.config.submit_label);
        self.submitting.store(false, Ordering::Release);
        debug!("idle");
    }
}
