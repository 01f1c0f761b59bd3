use folio_config::Config;
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::contact::FieldId;
use tracing::info;

use super::{draft::apply, FieldArgs};
use crate::environment;

pub async fn invoke(config: Config, fields: FieldArgs) -> anyhow::Result<()> {
    let feature = environment::contact_feature(&config);
    run(&feature, fields.changes()).await?;
    info!("Message sent");
    Ok(())
}

/// Restores the saved draft, applies `changes` on top of it and submits the
/// result.
async fn run(
    feature: &impl ContactFeatureService,
    changes: Vec<(FieldId, String)>,
) -> Result<(), ContactSubmitError> {
    let mut snapshot = feature.initialize().await;
    apply(feature, &mut snapshot, changes).await;
    feature.submit(snapshot).await
}
