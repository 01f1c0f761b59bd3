use folio_models::contact::{FieldId, FormSnapshot};

/// Sink for everything the contact form wants rendered.
///
/// Requests are fire-and-forget; nothing is ever read back.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PresentationService: Send + Sync + 'static {
    /// Shows `message` next to `field`, replacing any previous error.
    fn show_field_error(&self, field: FieldId, message: &str);

    /// Removes the error shown next to `field`, if any.
    fn clear_field_error(&self, field: FieldId);

    /// Fills the form with previously saved values.
    fn prefill_fields(&self, snapshot: &FormSnapshot);

    /// Empties every form field.
    fn reset_fields(&self);

    fn show_success_overlay(&self);

    fn hide_success_overlay(&self);

    /// Tells the user that the submission did not go through.
    fn show_failure_notice(&self, reason: &str);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_submit_label(&self, label: &str);
}

#[cfg(feature = "mock")]
impl MockPresentationService {
    pub fn with_show_field_error(mut self, field: FieldId, message: &str) -> Self {
        self.expect_show_field_error()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(message.to_owned()),
            )
            .return_const(());
        self
    }

    pub fn with_clear_field_error(mut self, field: FieldId) -> Self {
        self.expect_clear_field_error()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_prefill_fields(mut self, snapshot: FormSnapshot) -> Self {
        self.expect_prefill_fields()
            .once()
            .with(mockall::predicate::eq(snapshot))
            .return_const(());
        self
    }

    pub fn with_hide_success_overlay(mut self) -> Self {
        self.expect_hide_success_overlay().once().return_const(());
        self
    }
}
