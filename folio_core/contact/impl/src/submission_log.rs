use anyhow::Context;
use folio_core_contact_contracts::submission_log::ContactSubmissionLogService;
use folio_models::contact::{SubmissionRecord, SUBMISSIONS_KEY};
use folio_store_contracts::StoreService;

/// Keeps the log as a JSON array under [`SUBMISSIONS_KEY`]. Existing entries
/// are carried over as raw JSON and never rewritten.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmissionLogServiceImpl<Store> {
    store: Store,
}

impl<Store> ContactSubmissionLogServiceImpl<Store> {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl<Store> ContactSubmissionLogService for ContactSubmissionLogServiceImpl<Store>
where
    Store: StoreService,
{
    #[tracing::instrument(skip_all, fields(timestamp = %record.timestamp))]
    async fn append(&self, record: &SubmissionRecord) -> anyhow::Result<()> {
        let mut log = match self.store.get(SUBMISSIONS_KEY).await? {
            Some(value) => serde_json::from_str::<Vec<serde_json::Value>>(&value)
                .context("Failed to parse submission log")?,
            None => Vec::new(),
        };

        log.push(serde_json::to_value(record).context("Failed to serialize submission")?);

        let value = serde_json::to_string(&log).context("Failed to serialize submission log")?;
        self.store.set(SUBMISSIONS_KEY, value).await
    }
}
