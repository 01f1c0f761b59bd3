use std::{
    fmt,
    io::{self, Stdout, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use folio_models::contact::{FieldId, FormSnapshot};
use folio_presentation_contracts::PresentationService;
use tracing::{debug, warn};

pub const SUCCESS_MESSAGE: &str =
    "Message sent! Thank you for reaching out, I'll get back to you soon.";

/// Renders presentation requests as lines of text.
///
/// Field resets, error clears and the submit button state have no textual
/// representation and are only logged. The submit label is printed while the
/// button is disabled, which is when it acts as a pending indicator.
#[derive(Debug)]
pub struct ConsolePresentation<W = Stdout> {
    out: Arc<Mutex<W>>,
    submit_enabled: Arc<AtomicBool>,
}

impl<W> Clone for ConsolePresentation<W> {
    fn clone(&self) -> Self {
        Self {
            out: Arc::clone(&self.out),
            submit_enabled: Arc::clone(&self.submit_enabled),
        }
    }
}

impl ConsolePresentation {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> ConsolePresentation<W>
where
    W: Write + Send + 'static,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            submit_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        let Ok(mut out) = self.out.lock() else {
            warn!("Console output lock is poisoned");
            return;
        };
        if let Err(err) = out.write_fmt(args).and_then(|()| out.write_all(b"\n")) {
            warn!("Failed to write to console: {err}");
        }
    }
}

impl<W> PresentationService for ConsolePresentation<W>
where
    W: Write + Send + 'static,
{
    fn show_field_error(&self, field: FieldId, message: &str) {
        self.line(format_args!("✗ {}: {message}", field.label()));
    }

    fn clear_field_error(&self, field: FieldId) {
        debug!(%field, "clear field error");
    }

    fn prefill_fields(&self, snapshot: &FormSnapshot) {
        if *snapshot == FormSnapshot::default() {
            return;
        }
        self.line(format_args!("Restored saved draft"));
        for field in FieldId::ALL {
            let value = snapshot.get(field);
            if !value.is_empty() {
                self.line(format_args!("  {}: {value}", field.label()));
            }
        }
    }

    fn reset_fields(&self) {
        debug!("reset fields");
    }

    fn show_success_overlay(&self) {
        self.line(format_args!("✓ {SUCCESS_MESSAGE}"));
    }

    fn hide_success_overlay(&self) {
        debug!("hide success overlay");
    }

    fn show_failure_notice(&self, reason: &str) {
        self.line(format_args!(
            "There was an error sending your message ({reason}). Please try again."
        ));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        debug!(enabled, "set submit enabled");
        self.submit_enabled.store(enabled, Ordering::Relaxed);
    }

    fn set_submit_label(&self, label: &str) {
        if !self.submit_enabled.load(Ordering::Relaxed) {
            self.line(format_args!("» {label}"));
        }
    }
}
