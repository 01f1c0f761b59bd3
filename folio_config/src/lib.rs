use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::theme::Theme;
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from `paths`. Later files override values of
/// earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub contact: ContactConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submit_label: String,
    pub pending_label: String,
    pub submit_delay: Duration,
    pub submit_timeout: Option<Duration>,
    /// Makes the simulated transport reject every submission with this reason.
    pub simulate_failure: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    pub default: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.contact.submit_label, "Send Message");
        assert_eq!(config.contact.pending_label, "Sending...");
        assert_eq!(*config.contact.submit_delay, std::time::Duration::from_secs(2));
        assert_eq!(config.contact.simulate_failure, None);
        assert_eq!(config.theme.default, Theme::Light);
    }
}
