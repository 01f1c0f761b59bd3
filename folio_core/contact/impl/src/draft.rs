use anyhow::Context;
use folio_core_contact_contracts::draft::ContactDraftService;
use folio_models::contact::{FormSnapshot, DRAFT_KEY};
use folio_store_contracts::StoreService;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct ContactDraftServiceImpl<Store> {
    store: Store,
}

impl<Store> ContactDraftServiceImpl<Store> {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl<Store> ContactDraftService for ContactDraftServiceImpl<Store>
where
    Store: StoreService,
{
    #[tracing::instrument(skip_all)]
    async fn save_draft(&self, snapshot: &FormSnapshot) {
        if let Err(err) = self.try_save_draft(snapshot).await {
            warn!("Failed to save draft: {err:#}");
        }
    }

    #[tracing::instrument(skip(self))]
    async fn load_draft(&self) -> FormSnapshot {
        match self.try_load_draft().await {
            Ok(draft) => draft.unwrap_or_default(),
            Err(err) => {
                warn!("Failed to load draft, starting with an empty form: {err:#}");
                FormSnapshot::default()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn clear_draft(&self) {
        if let Err(err) = self.store.remove(DRAFT_KEY).await {
            warn!("Failed to clear draft: {err:#}");
        }
    }
}

impl<Store> ContactDraftServiceImpl<Store>
where
    Store: StoreService,
{
    async fn try_save_draft(&self, snapshot: &FormSnapshot) -> anyhow::Result<()> {
        let value = serde_json::to_string(snapshot).context("Failed to serialize draft")?;
        self.store.set(DRAFT_KEY, value).await
    }

    async fn try_load_draft(&self) -> anyhow::Result<Option<FormSnapshot>> {
        self.store
            .get(DRAFT_KEY)
            .await?
            .map(|value| serde_json::from_str(&value))
            .transpose()
            .context("Failed to parse draft")
    }
}
