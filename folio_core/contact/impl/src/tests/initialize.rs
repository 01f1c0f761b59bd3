use folio_core_contact_contracts::{draft::MockContactDraftService, ContactFeatureService};
use folio_demo::contact::JANE_WITHOUT_MESSAGE;
use folio_models::contact::FormSnapshot;
use folio_presentation_contracts::MockPresentationService;
use pretty_assertions::assert_eq;

use crate::tests::Sut;

#[tokio::test]
async fn prefill_from_draft() {
    // Arrange
    let draft = MockContactDraftService::new().with_load_draft(JANE_WITHOUT_MESSAGE.clone());

    // An incomplete draft is restored without surfacing any field errors.
    let presentation =
        MockPresentationService::new().with_prefill_fields(JANE_WITHOUT_MESSAGE.clone());

    let sut = Sut {
        draft,
        presentation,
        ..Sut::default()
    };

    // Act
    let result = sut.initialize().await;

    // Assert
    assert_eq!(result, *JANE_WITHOUT_MESSAGE);
}

#[tokio::test]
async fn no_draft() {
    // Arrange
    let draft = MockContactDraftService::new().with_load_draft(FormSnapshot::default());
    let presentation = MockPresentationService::new().with_prefill_fields(FormSnapshot::default());

    let sut = Sut {
        draft,
        presentation,
        ..Sut::default()
    };

    // Act
    let result = sut.initialize().await;

    // Assert
    assert_eq!(result, FormSnapshot::default());
}
