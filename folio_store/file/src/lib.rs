use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use folio_store_contracts::StoreService;
use tokio::{fs, sync::Mutex};

type Entries = BTreeMap<String, String>;

/// Store persisted as a single JSON object in a file.
///
/// Every operation reads the file, so values written by another process are
/// visible on the next read. Writes replace the file atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Default::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> anyhow::Result<Entries> {
        let content = match fs::read_to_string(&*self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read store file at {}", self.path.display())
                })
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file at {}", self.path.display()))
    }

    async fn write(&self, entries: &Entries) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(entries).context("Failed to serialize store")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("Failed to write store file at {}", tmp.display()))?;
        fs::rename(&tmp, &*self.path)
            .await
            .with_context(|| format!("Failed to replace store file at {}", self.path.display()))
    }
}

impl StoreService for FileStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.remove(key))
    }

    #[tracing::instrument(skip(self, value), fields(path = %self.path.display()))]
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read().await?;
        entries.insert(key.into(), value);
        self.write(&entries).await
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read().await?;
        if entries.remove(key).is_some() {
            self.write(&entries).await?;
        }
        Ok(())
    }
}
