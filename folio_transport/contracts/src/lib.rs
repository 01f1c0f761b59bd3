use std::future::Future;

use folio_models::contact::SubmissionRecord;
use thiserror::Error;

/// Delivers a contact form submission.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionTransport: Send + Sync + 'static {
    /// Hands `record` over for delivery and resolves once it has been either
    /// accepted or rejected.
    fn submit(
        &self,
        record: SubmissionRecord,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

/// The `Display` output is the reason presented to the user.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),
    #[error("timeout")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubmissionTransport {
    pub fn with_submit(mut self, record: SubmissionRecord) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_submit_rejected(mut self, record: SubmissionRecord, reason: &str) -> Self {
        let reason = reason.to_owned();
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| {
                Box::pin(std::future::ready(Err(SubmissionError::Rejected(reason))))
            });
        self
    }
}
