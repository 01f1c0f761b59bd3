use std::io::Write;

use anyhow::Context;
use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::{draft::ContactDraftService, ContactFeatureService};
use folio_models::contact::{FieldId, FormSnapshot};
use tracing::info;

use super::FieldArgs;
use crate::environment;

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Print the saved draft as JSON
    #[command(aliases(["s"]))]
    Show,
    /// Change fields of the saved draft
    Save {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Discard the saved draft
    #[command(aliases(["rm"]))]
    Clear,
}

impl DraftCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let draft = environment::contact_draft(&config);
        match self {
            DraftCommand::Show => show(&draft, &mut std::io::stdout()).await,
            DraftCommand::Save { fields } => {
                let feature = environment::contact_feature(&config);
                save(&feature, &draft, fields.changes()).await;
                Ok(())
            }
            DraftCommand::Clear => {
                draft.clear_draft().await;
                info!("Draft cleared");
                Ok(())
            }
        }
    }
}

async fn show(draft: &impl ContactDraftService, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = draft.load_draft().await;
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize draft")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Applies `changes` to the saved draft one field at a time, the way typing
/// into the form would.
pub(crate) async fn save(
    feature: &impl ContactFeatureService,
    draft: &impl ContactDraftService,
    changes: Vec<(FieldId, String)>,
) -> FormSnapshot {
    let mut snapshot = draft.load_draft().await;
    apply(feature, &mut snapshot, changes).await;
    snapshot
}

pub(crate) async fn apply(
    feature: &impl ContactFeatureService,
    snapshot: &mut FormSnapshot,
    changes: Vec<(FieldId, String)>,
) {
    for (field, value) in changes {
        snapshot.set(field, value);
        feature.field_input(field, snapshot).await;
    }
}
