use std::{sync::Arc, time::Duration};

use folio_models::contact::SubmissionRecord;
use folio_transport_contracts::{SubmissionError, SubmissionTransport};
use tracing::info;

/// Stand-in for a real delivery channel: waits for `delay`, then accepts the
/// submission, or rejects it with `failure` if one is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    config: SimulatedTransportConfig,
}

#[derive(Debug, Clone)]
pub struct SimulatedTransportConfig {
    pub delay: Duration,
    pub failure: Option<Arc<str>>,
}

impl SimulatedTransport {
    pub fn new(config: SimulatedTransportConfig) -> Self {
        Self { config }
    }
}

impl SubmissionTransport for SimulatedTransport {
    #[tracing::instrument(skip(self, record), fields(timestamp = %record.timestamp))]
    async fn submit(&self, record: SubmissionRecord) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.config.delay).await;

        if let Some(failure) = &self.config.failure {
            return Err(SubmissionError::Rejected(failure.to_string()));
        }

        info!(email = %record.snapshot.email, "submission accepted");
        Ok(())
    }
}
