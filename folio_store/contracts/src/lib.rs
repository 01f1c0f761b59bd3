use std::future::Future;

/// A string-keyed, string-valued store that outlives the current session.
///
/// Reads and writes are not transactional; the last write wins.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait StoreService: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    /// Creates a new or overwrites an existing value.
    fn set(&self, key: &str, value: String) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Removes the value stored under `key`.
    ///
    /// Does nothing if there is no such value.
    fn remove(&self, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockStoreService {
    pub fn with_get(mut self, key: String, result: Option<String>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_error(mut self, key: String) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "Failed to read value"
                ))))
            });
        self
    }

    pub fn with_set(mut self, key: String, value: String) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::eq(value))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_set_error(mut self, key: String) -> Self {
        self.expect_set()
            .once()
            .with(
                mockall::predicate::eq(key),
                mockall::predicate::always(),
            )
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "Failed to write value"
                ))))
            });
        self
    }

    pub fn with_remove(mut self, key: String) -> Self {
        self.expect_remove()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_remove_error(mut self, key: String) -> Self {
        self.expect_remove()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "Failed to remove value"
                ))))
            });
        self
    }
}
