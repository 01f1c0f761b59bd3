use std::future::Future;

use folio_models::contact::SubmissionRecord;

/// Append-only log of accepted submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionLogService: Send + Sync + 'static {
    /// Appends `record` to the log, leaving existing entries untouched.
    fn append(&self, record: &SubmissionRecord) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSubmissionLogService {
    pub fn with_append(mut self, record: SubmissionRecord, ok: bool) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("Failed to append submission"))
                }))
            });
        self
    }
}
