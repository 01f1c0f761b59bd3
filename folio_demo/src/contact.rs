use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use folio_models::contact::{FormSnapshot, SubmissionRecord};

pub static TIMESTAMP: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap() + chrono::Duration::milliseconds(123)
});

pub static JANE: LazyLock<FormSnapshot> = LazyLock::new(|| FormSnapshot {
    name: "Jane Doe".into(),
    email: "jane@x.com".into(),
    subject: "Hi".into(),
    message: "Hello there, this works.".into(),
});

pub static JANE_RECORD: LazyLock<SubmissionRecord> = LazyLock::new(|| SubmissionRecord {
    snapshot: JANE.clone(),
    timestamp: *TIMESTAMP,
});

/// Valid except for the missing message.
pub static JANE_WITHOUT_MESSAGE: LazyLock<FormSnapshot> = LazyLock::new(|| FormSnapshot {
    message: String::new(),
    ..JANE.clone()
});

pub static UNICODE: LazyLock<FormSnapshot> = LazyLock::new(|| FormSnapshot {
    name: "Zoë Ñúñez 李雷".into(),
    email: "zoë@例え.jp".into(),
    subject: "  \"quoted\" \\ back\\slash \u{0}".into(),
    message: "Hello 🦀\nline two\ttabbed, emoji 👩‍👩‍👧 and RTL שלום".into(),
});
