use std::io::Write;

use clap::Subcommand;
use folio_config::Config;
use folio_core_theme_contracts::ThemeFeatureService;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    #[command(aliases(["t"]))]
    Toggle,
}

impl ThemeCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let feature = environment::theme_feature(&config);
        self.run(&feature, &mut std::io::stdout()).await
    }

    async fn run(
        self,
        feature: &impl ThemeFeatureService,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let theme = match self {
            ThemeCommand::Show => feature.current().await,
            ThemeCommand::Toggle => feature.toggle().await,
        };
        writeln!(out, "{theme}")?;
        Ok(())
    }
}
