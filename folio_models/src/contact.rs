use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Store key of the current draft.
pub const DRAFT_KEY: &str = "contactFormDraft";

/// Store key of the append-only log of accepted submissions.
pub const SUBMISSIONS_KEY: &str = "formSubmissions";

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The fields checked before a submission is handed to the transport.
    pub const VALIDATED: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        self.rule().is_some()
    }

    /// Returns the rule a non-empty value of this field must satisfy, or
    /// `None` if the field is not validated at all.
    pub fn rule(self) -> Option<FieldRule> {
        match self {
            Self::Name => Some(FieldRule::MinChars(NAME_MIN_CHARS)),
            Self::Email => Some(FieldRule::EmailAddress),
            Self::Message => Some(FieldRule::MinChars(MESSAGE_MIN_CHARS)),
            Self::Subject => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error)]
#[error("Unknown field `{0}`")]
pub struct UnknownFieldError(pub String);

impl FromStr for FieldId {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownFieldError(s.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// At least this many characters (not bytes).
    MinChars(usize),
    EmailAddress,
}

/// A field value with leading and trailing whitespace removed. A byte order
/// mark counts as whitespace.
#[nutype(
    sanitize(with = trim_field_value),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, AsRef)
)]
pub struct FieldValue(String);

fn trim_field_value(value: String) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_owned()
}

/// The reason a field value was rejected. The `Display` output is the message
/// shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(FieldId),
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: FieldId, min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(self) -> FieldId {
        match self {
            Self::Required(field) | Self::TooShort { field, .. } => field,
            Self::InvalidEmail => FieldId::Email,
        }
    }
}

/// `Ok(())` iff the value is valid; the error carries the message otherwise.
pub type ValidationResult = Result<(), FieldError>;

/// Validates the trimmed `value` of `field`.
pub fn validate(field: FieldId, value: &str) -> ValidationResult {
    let Some(rule) = field.rule() else {
        return Ok(());
    };

    let value = FieldValue::new(value.to_owned());
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }

    match rule {
        FieldRule::MinChars(min) if value.chars().count() < min => {
            Err(FieldError::TooShort { field, min })
        }
        FieldRule::EmailAddress if !EMAIL_REGEX.is_match(&value) => Err(FieldError::InvalidEmail),
        _ => Ok(()),
    }
}

/// The values of all form fields at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl FormSnapshot {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Validates every validated field and returns all failures, in field
    /// order. Does not stop at the first invalid field.
    pub fn errors(&self) -> Vec<FieldError> {
        FieldId::VALIDATED
            .into_iter()
            .filter_map(|field| validate(field, self.get(field)).err())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An accepted submission as recorded in the submission log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub snapshot: FormSnapshot,
    #[serde(with = "folio_utils::serde::iso8601")]
    pub timestamp: DateTime<Utc>,
}
