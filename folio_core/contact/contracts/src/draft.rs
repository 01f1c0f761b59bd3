use std::future::Future;

use folio_models::contact::FormSnapshot;

/// Best-effort persistence of unsent form contents. Store failures are never
/// reported to the caller.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactDraftService: Send + Sync + 'static {
    /// Overwrites the saved draft with `snapshot`.
    fn save_draft(&self, snapshot: &FormSnapshot) -> impl Future<Output = ()> + Send;

    /// Returns the saved draft, or an empty snapshot if there is none or it
    /// cannot be read.
    fn load_draft(&self) -> impl Future<Output = FormSnapshot> + Send;

    /// Removes the saved draft. Does nothing if there is none.
    fn clear_draft(&self) -> impl Future<Output = ()> + Send;
}

#[cfg(feature = "mock")]
impl MockContactDraftService {
    pub fn with_save_draft(mut self, snapshot: FormSnapshot) -> Self {
        self.expect_save_draft()
            .once()
            .with(mockall::predicate::eq(snapshot))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_load_draft(mut self, result: FormSnapshot) -> Self {
        self.expect_load_draft()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_clear_draft(mut self) -> Self {
        self.expect_clear_draft()
            .once()
            .return_once(|| Box::pin(std::future::ready(())));
        self
    }
}
