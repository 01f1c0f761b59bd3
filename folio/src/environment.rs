//! Wires the concrete services together according to the configuration.

use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_impl::{
    draft::ContactDraftServiceImpl, submission_log::ContactSubmissionLogServiceImpl,
    ContactFeatureConfig, ContactFeatureServiceImpl,
};
use folio_core_theme_impl::{ThemeFeatureConfig, ThemeFeatureServiceImpl};
use folio_presentation_console::ConsolePresentation;
use folio_shared_impl::time::TimeServiceImpl;
use folio_store_file::FileStore;
use folio_transport_simulated::{SimulatedTransport, SimulatedTransportConfig};

pub type Store = FileStore;
pub type Presentation = ConsolePresentation;
pub type Transport = SimulatedTransport;
pub type ContactDraft = ContactDraftServiceImpl<Store>;
pub type ContactSubmissionLog = ContactSubmissionLogServiceImpl<Store>;
pub type ContactFeature = ContactFeatureServiceImpl<
    Presentation,
    Transport,
    TimeServiceImpl,
    ContactDraft,
    ContactSubmissionLog,
>;
pub type ThemeFeature = ThemeFeatureServiceImpl<Store>;

pub fn store(config: &Config) -> Store {
    FileStore::new(&config.store.path)
}

pub fn contact_draft(config: &Config) -> ContactDraft {
    ContactDraftServiceImpl::new(store(config))
}

pub fn contact_feature(config: &Config) -> ContactFeature {
    let store = store(config);

    let transport = SimulatedTransport::new(SimulatedTransportConfig {
        delay: config.contact.submit_delay.into(),
        failure: config.contact.simulate_failure.as_deref().map(Arc::from),
    });

    ContactFeatureServiceImpl::new(
        ConsolePresentation::stdout(),
        transport,
        TimeServiceImpl,
        ContactDraftServiceImpl::new(store.clone()),
        ContactSubmissionLogServiceImpl::new(store),
        ContactFeatureConfig {
            submit_label: config.contact.submit_label.as_str().into(),
            pending_label: config.contact.pending_label.as_str().into(),
            submit_timeout: config.contact.submit_timeout.map(Into::into),
        },
    )
}

pub fn theme_feature(config: &Config) -> ThemeFeature {
    ThemeFeatureServiceImpl::new(
        store(config),
        ThemeFeatureConfig {
            default: config.theme.default,
        },
    )
}
