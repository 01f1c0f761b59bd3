use std::time::Duration;

use assert_matches::assert_matches;
use folio_core_contact_contracts::{
    draft::MockContactDraftService, submission_log::MockContactSubmissionLogService,
    ContactFeatureService, ContactSubmitError, SubmitState,
};
use folio_demo::contact::{JANE, JANE_RECORD, JANE_WITHOUT_MESSAGE, TIMESTAMP};
use folio_models::contact::FieldId;
use folio_presentation_contracts::MockPresentationService;
use folio_shared_contracts::time::MockTimeService;
use folio_transport_contracts::{MockSubmissionTransport, SubmissionError};
use mockall::{predicate::eq, Sequence};

use crate::{
    tests::{expect_all_valid, expect_idle, expect_pending, Sut},
    ContactFeatureConfig,
};

#[tokio::test]
async fn ok() {
    // Arrange
    let mut seq = Sequence::new();

    let mut presentation = expect_all_valid(MockPresentationService::new());
    let mut transport = MockSubmissionTransport::new();

    expect_pending(&mut presentation, &mut seq);
    transport
        .expect_submit()
        .once()
        .with(eq(JANE_RECORD.clone()))
        .in_sequence(&mut seq)
        .return_once(|_| Box::pin(std::future::ready(Ok(()))));
    presentation
        .expect_show_success_overlay()
        .once()
        .in_sequence(&mut seq)
        .return_const(());
    presentation
        .expect_reset_fields()
        .once()
        .in_sequence(&mut seq)
        .return_const(());
    let mut draft = MockContactDraftService::new();
    draft
        .expect_clear_draft()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(std::future::ready(())));
    expect_idle(&mut presentation, &mut seq);

    let time = MockTimeService::new().with_now(*TIMESTAMP);
    let submission_log =
        MockContactSubmissionLogService::new().with_append(JANE_RECORD.clone(), true);

    let sut = Sut {
        presentation,
        transport,
        time,
        draft,
        submission_log,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(JANE.clone()).await;

    // Assert
    result.unwrap();
    assert_eq!(sut.state(), SubmitState::Idle);
}

#[tokio::test]
async fn rejected() {
    // Arrange
    let mut seq = Sequence::new();

    let mut presentation = expect_all_valid(MockPresentationService::new());
    expect_pending(&mut presentation, &mut seq);
    presentation
        .expect_show_failure_notice()
        .once()
        .with(eq("network".to_owned()))
        .in_sequence(&mut seq)
        .return_const(());
    expect_idle(&mut presentation, &mut seq);

    let transport =
        MockSubmissionTransport::new().with_submit_rejected(JANE_RECORD.clone(), "network");
    let time = MockTimeService::new().with_now(*TIMESTAMP);

    // The draft must survive, so neither the draft nor the log may be touched.
    let sut = Sut {
        presentation,
        transport,
        time,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(JANE.clone()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Send(SubmissionError::Rejected(reason))) if reason == "network"
    );
    assert_eq!(sut.state(), SubmitState::Idle);
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let presentation = MockPresentationService::new()
        .with_clear_field_error(FieldId::Name)
        .with_clear_field_error(FieldId::Email)
        .with_show_field_error(FieldId::Message, "Message is required");

    let sut = Sut {
        presentation,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(JANE_WITHOUT_MESSAGE.clone()).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Invalid));
    assert_eq!(sut.state(), SubmitState::Idle);
}

#[tokio::test]
async fn log_failure_does_not_fail_submission() {
    // Arrange
    let mut presentation = expect_all_valid(MockPresentationService::new());
    let mut seq = Sequence::new();
    expect_pending(&mut presentation, &mut seq);
    presentation
        .expect_show_success_overlay()
        .once()
        .return_const(());
    presentation.expect_reset_fields().once().return_const(());
    expect_idle(&mut presentation, &mut seq);

    let transport = MockSubmissionTransport::new().with_submit(JANE_RECORD.clone());
    let time = MockTimeService::new().with_now(*TIMESTAMP);
    let submission_log =
        MockContactSubmissionLogService::new().with_append(JANE_RECORD.clone(), false);
    let draft = MockContactDraftService::new().with_clear_draft();

    let sut = Sut {
        presentation,
        transport,
        time,
        draft,
        submission_log,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(JANE.clone()).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn timeout() {
    // Arrange
    let mut seq = Sequence::new();

    let mut presentation = expect_all_valid(MockPresentationService::new());
    expect_pending(&mut presentation, &mut seq);
    presentation
        .expect_show_failure_notice()
        .once()
        .with(eq("timeout".to_owned()))
        .in_sequence(&mut seq)
        .return_const(());
    expect_idle(&mut presentation, &mut seq);

    let mut transport = MockSubmissionTransport::new();
    transport
        .expect_submit()
        .once()
        .return_once(|_| {
            Box::pin(std::future::pending::<Result<(), SubmissionError>>())
        });

    let time = MockTimeService::new().with_now(*TIMESTAMP);

    let sut = Sut {
        presentation,
        transport,
        time,
        config: ContactFeatureConfig {
            submit_timeout: Some(Duration::from_millis(10)),
            ..Default::default()
        },
        ..Sut::default()
    };

    // Act
    let result = sut.submit(JANE.clone()).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Send(SubmissionError::Timeout)));
    assert_eq!(sut.state(), SubmitState::Idle);
}

#[tokio::test]
async fn dropped_submission_returns_to_idle() {
    // Arrange
    let mut seq = Sequence::new();

    let mut presentation = expect_all_valid(MockPresentationService::new());
    expect_pending(&mut presentation, &mut seq);
    expect_idle(&mut presentation, &mut seq);

    let mut transport = MockSubmissionTransport::new();
    transport
        .expect_submit()
        .once()
        .return_once(|_| {
            Box::pin(std::future::pending::<Result<(), SubmissionError>>())
        });

    let time = MockTimeService::new().with_now(*TIMESTAMP);

    let sut = Sut {
        presentation,
        transport,
        time,
        ..Sut::default()
    };

    // Act
    let result = tokio::time::timeout(Duration::from_millis(10), sut.submit(JANE.clone())).await;

    // Assert
    assert!(result.is_err());
    assert_eq!(sut.state(), SubmitState::Idle);
}

#[tokio::test]
async fn second_submit_is_ignored_while_submitting() {
    // Arrange
    let (release, released) = tokio::sync::oneshot::channel::<()>();

    let mut presentation = expect_all_valid(MockPresentationService::new());
    let mut seq = Sequence::new();
    expect_pending(&mut presentation, &mut seq);
    presentation
        .expect_show_success_overlay()
        .once()
        .return_const(());
    presentation.expect_reset_fields().once().return_const(());
    expect_idle(&mut presentation, &mut seq);

    let mut transport = MockSubmissionTransport::new();
    transport
        .expect_submit()
        .once()
        .with(eq(JANE_RECORD.clone()))
        .return_once(|_| {
            Box::pin(async move {
                released.await.ok();
                Ok::<_, SubmissionError>(())
            })
        });

    let time = MockTimeService::new().with_now(*TIMESTAMP);
    let submission_log =
        MockContactSubmissionLogService::new().with_append(JANE_RECORD.clone(), true);
    let draft = MockContactDraftService::new().with_clear_draft();

    let sut = Sut {
        presentation,
        transport,
        time,
        draft,
        submission_log,
        ..Sut::default()
    };

    // Act
    let (first, (state, second)) = tokio::join!(sut.submit(JANE.clone()), async {
        tokio::task::yield_now().await;
        let state = sut.state();
        let second = sut.submit(JANE.clone()).await;
        release.send(()).ok();
        (state, second)
    });

    // Assert
    first.unwrap();
    assert_eq!(state, SubmitState::Submitting);
    assert_matches!(second, Err(ContactSubmitError::InProgress));
    assert_eq!(sut.state(), SubmitState::Idle);
}
