use std::future::Future;

use folio_models::theme::Theme;

/// The persisted color scheme preference.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeFeatureService: Send + Sync + 'static {
    /// Returns the saved theme, falling back to the configured default.
    fn current(&self) -> impl Future<Output = Theme> + Send;

    /// Switches to the other theme, saves it and returns it.
    fn toggle(&self) -> impl Future<Output = Theme> + Send;
}

#[cfg(feature = "mock")]
impl MockThemeFeatureService {
    pub fn with_current(mut self, theme: Theme) -> Self {
        self.expect_current()
            .once()
            .return_once(move || Box::pin(std::future::ready(theme)));
        self
    }

    pub fn with_toggle(mut self, theme: Theme) -> Self {
        self.expect_toggle()
            .once()
            .return_once(move || Box::pin(std::future::ready(theme)));
        self
    }
}
