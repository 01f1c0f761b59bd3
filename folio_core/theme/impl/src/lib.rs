use folio_core_theme_contracts::ThemeFeatureService;
use folio_models::theme::{Theme, THEME_KEY};
use folio_store_contracts::StoreService;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ThemeFeatureServiceImpl<Store> {
    store: Store,
    config: ThemeFeatureConfig,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeFeatureConfig {
    pub default: Theme,
}

impl<Store> ThemeFeatureServiceImpl<Store> {
    pub fn new(store: Store, config: ThemeFeatureConfig) -> Self {
        Self { store, config }
    }
}

impl<Store> ThemeFeatureService for ThemeFeatureServiceImpl<Store>
where
    Store: StoreService,
{
    #[tracing::instrument(skip(self))]
    async fn current(&self) -> Theme {
        match self.store.get(THEME_KEY).await {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
                debug!("Ignoring saved theme: {err}");
                self.config.default
            }),
            Ok(None) => self.config.default,
            Err(err) => {
                warn!("Failed to load theme: {err:#}");
                self.config.default
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn toggle(&self) -> Theme {
        let theme = self.current().await.toggled();
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str().into()).await {
            warn!("Failed to save theme: {err:#}");
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use folio_store_contracts::MockStoreService;
    use folio_store_memory::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn current_default() {
        for default in [Theme::Light, Theme::Dark] {
            let sut =
                ThemeFeatureServiceImpl::new(MemoryStore::new(), ThemeFeatureConfig { default });
            assert_eq!(sut.current().await, default);
        }
    }

    #[tokio::test]
    async fn current_saved() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let sut = ThemeFeatureServiceImpl::new(store, ThemeFeatureConfig::default());

        assert_eq!(sut.current().await, Theme::Dark);
    }

    #[tokio::test]
    async fn current_unknown_value() {
        let store = MemoryStore::with_entries([(THEME_KEY, "\"dark\"")]);
        let sut = ThemeFeatureServiceImpl::new(
            store,
            ThemeFeatureConfig {
                default: Theme::Light,
            },
        );

        assert_eq!(sut.current().await, Theme::Light);
    }

    #[tokio::test]
    async fn toggle() {
        let store = MemoryStore::new();
        let sut = ThemeFeatureServiceImpl::new(store.clone(), ThemeFeatureConfig::default());

        assert_eq!(sut.toggle().await, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).await.unwrap().unwrap(), "dark");

        assert_eq!(sut.toggle().await, Theme::Light);
        assert_eq!(store.get(THEME_KEY).await.unwrap().unwrap(), "light");
    }

    #[tokio::test]
    async fn toggle_store_errors() {
        let store = MockStoreService::new()
            .with_get_error(THEME_KEY.into())
            .with_set_error(THEME_KEY.into());
        let sut = ThemeFeatureServiceImpl::new(store, ThemeFeatureConfig::default());

        assert_eq!(sut.toggle().await, Theme::Dark);
    }
}
