use folio_core_contact_contracts::{
    draft::MockContactDraftService, submission_log::MockContactSubmissionLogService,
};
use folio_models::contact::FieldId;
use folio_presentation_contracts::MockPresentationService;
use folio_shared_contracts::time::MockTimeService;
use folio_transport_contracts::MockSubmissionTransport;
use mockall::{predicate::eq, Sequence};

use crate::ContactFeatureServiceImpl;

mod initialize;
mod submit;

type Sut = ContactFeatureServiceImpl<
    MockPresentationService,
    MockSubmissionTransport,
    MockTimeService,
    MockContactDraftService,
    MockContactSubmissionLogService,
>;

/// Expects every validated field to be reported as valid.
fn expect_all_valid(presentation: MockPresentationService) -> MockPresentationService {
    FieldId::VALIDATED
        .into_iter()
        .fold(presentation, |presentation, field| {
            presentation.with_clear_field_error(field)
        })
}

/// Expects the submit control to be disabled and labeled as pending, in this
/// order, within `seq`.
fn expect_pending(presentation: &mut MockPresentationService, seq: &mut Sequence) {
    presentation
        .expect_set_submit_enabled()
        .once()
        .with(eq(false))
        .in_sequence(seq)
        .return_const(());
    presentation
        .expect_set_submit_label()
        .once()
        .with(eq("Sending...".to_owned()))
        .in_sequence(seq)
        .return_const(());
}

/// Expects the submit control to be re-enabled and its label restored, in
/// this order, within `seq`.
fn expect_idle(presentation: &mut MockPresentationService, seq: &mut Sequence) {
    presentation
        .expect_set_submit_enabled()
        .once()
        .with(eq(true))
        .in_sequence(seq)
        .return_const(());
    presentation
        .expect_set_submit_label()
        .once()
        .with(eq("Send Message".to_owned()))
        .in_sequence(seq)
        .return_const(());
}
