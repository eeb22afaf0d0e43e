//! Request validation helpers for inbound HTTP adapters.
//!
//! Field problems are collected into [`FieldErrors`] so a client sees every
//! malformed field in one response.

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::domain::Error;

/// JSON field name as the client sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Accumulator for per-field validation messages.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors(Vec<String>);

impl FieldErrors {
    /// Record a missing-field error when `value` is absent.
    pub(crate) fn require<T>(&mut self, value: Option<T>, field: FieldName) -> Option<T> {
        if value.is_none() {
            self.0.push(missing_field_message(field));
        }
        value
    }

    /// Like [`Self::require`], but treats blank text as missing.
    pub(crate) fn require_text(
        &mut self,
        value: Option<String>,
        field: FieldName,
    ) -> Option<String> {
        self.require(value.filter(|text| !text.trim().is_empty()), field)
    }

    /// Record the error from `result`, if any, and return the success value.
    pub(crate) fn check<T>(&mut self, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.push(message);
                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_messages(self) -> Vec<String> {
        self.0
    }
}

pub(crate) fn missing_field_message(field: FieldName) -> String {
    format!("missing required field: {}", field.as_str())
}

/// Check that `value` is between `min` and `max` characters long.
pub(crate) fn check_char_length(
    value: &str,
    field: FieldName,
    min: usize,
    max: usize,
) -> Result<(), String> {
    let length = value.chars().count();
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(format!(
            "{} must be between {min} and {max} characters",
            field.as_str()
        ))
    }
}

/// Parse an RFC 3339 timestamp, keeping its offset.
pub(crate) fn parse_rfc3339_timestamp(
    value: &str,
    field: FieldName,
) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|_| format!("{} must be an RFC 3339 timestamp", field.as_str()))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value)
        .map_err(|_| Error::invalid_request(format!("{} must be a valid UUID", field.as_str())))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const NAME: FieldName = FieldName::new("clientName");

    #[rstest]
    fn require_records_missing_values() {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.require(None::<u8>, NAME), None);
        assert_eq!(errors.require(Some(1_u8), NAME), Some(1));
        assert_eq!(
            errors.into_messages(),
            vec!["missing required field: clientName".to_owned()]
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    fn require_text_treats_blank_as_missing(#[case] raw: &str) {
        let mut errors = FieldErrors::default();
        assert!(errors.require_text(Some(raw.to_owned()), NAME).is_none());
        assert!(!errors.is_empty());
    }

    #[rstest]
    #[case::shortest("A", true)]
    #[case::longest(&"a".repeat(100), true)]
    #[case::too_long(&"a".repeat(101), false)]
    #[case::multibyte(&"é".repeat(100), true)]
    fn char_length_is_inclusive(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(check_char_length(value, NAME, 1, 100).is_ok(), ok);
    }

    #[rstest]
    #[case::utc("2026-03-02T10:30:00Z", true)]
    #[case::offset("2026-03-02T10:30:00+05:30", true)]
    #[case::no_offset("2026-03-02T10:30:00", false)]
    #[case::garbage("tomorrow", false)]
    fn timestamps_require_rfc3339(#[case] raw: &str, #[case] ok: bool) {
        let field = FieldName::new("appointmentTime");
        assert_eq!(parse_rfc3339_timestamp(raw, field).is_ok(), ok);
    }

    #[rstest]
    fn invalid_uuid_is_an_invalid_request() {
        let err = parse_uuid("nope", FieldName::new("id")).expect_err("invalid UUID");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "id must be a valid UUID");
    }
}
