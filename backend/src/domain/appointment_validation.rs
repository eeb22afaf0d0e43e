//! Validation of proposed appointments.
//!
//! Validation is pure: the caller supplies "now" so the rules can be tested
//! against fixed instants. Rejections are collected rather than
//! short-circuited, except that an invalid client name suppresses the timing
//! checks.

use std::num::NonZeroU32;

use chrono::{DateTime, Duration, Timelike, Utc};
use uuid::Uuid;

use crate::domain::appointment::is_slot_aligned;
use crate::domain::{Appointment, AppointmentRequest, ClientName};

/// A user-correctable reason an appointment was not booked.
///
/// The `Display` output is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentRejection {
    /// The trimmed client name contains control characters.
    #[error("Client name contains invalid characters")]
    InvalidClientName,
    /// The start time is earlier than now plus the future threshold.
    #[error("Appointment time must be in the future.")]
    NotInFuture,
    /// The start time is not on :00 or :30.
    #[error("Appointment must start on the hour or half-hour.")]
    NotOnSlotBoundary,
    /// The appointment collides with an existing booking.
    #[error("Overlapping appointment Id: {existing_id}")]
    Overlap {
        /// Identifier of the first conflicting appointment found.
        existing_id: Uuid,
    },
}

/// Configured rules applied during ingestion.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use appointments::domain::IngestionPolicy;
///
/// let thirty = NonZeroU32::new(30).expect("non-zero");
/// let policy = IngestionPolicy::new(5, thirty);
/// assert_eq!(policy.default_service_duration_minutes(), thirty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionPolicy {
    future_threshold_minutes: u32,
    default_service_duration_minutes: NonZeroU32,
}

impl IngestionPolicy {
    /// Build a policy from already validated settings.
    pub fn new(future_threshold_minutes: u32, default_service_duration_minutes: NonZeroU32) -> Self {
        Self {
            future_threshold_minutes,
            default_service_duration_minutes,
        }
    }

    /// Minimum lead time between now and an accepted start time.
    pub fn future_threshold_minutes(&self) -> u32 {
        self.future_threshold_minutes
    }

    /// Duration substituted when the request omits one or gives `<= 0`.
    pub fn default_service_duration_minutes(&self) -> NonZeroU32 {
        self.default_service_duration_minutes
    }

    fn earliest_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(i64::from(self.future_threshold_minutes))
    }

    fn resolve_duration(&self, requested: Option<i32>) -> NonZeroU32 {
        requested
            .and_then(|minutes| u32::try_from(minutes).ok())
            .and_then(NonZeroU32::new)
            .unwrap_or(self.default_service_duration_minutes)
    }
}

/// Validate `request` against `policy` at instant `now`.
///
/// On success the returned appointment carries a fresh identifier, the
/// trimmed client name, the start time converted to UTC and truncated to the
/// minute, and either the requested or the default duration.
///
/// # Errors
/// Returns every timing rejection found, or the single
/// [`AppointmentRejection::InvalidClientName`] when the name is invalid.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use appointments::domain::{AppointmentRequest, IngestionPolicy, validate_appointment};
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).single().expect("valid");
/// let offset = FixedOffset::east_opt(3600).expect("valid offset");
/// let request = AppointmentRequest {
///     client_name: " Ada ".to_owned(),
///     appointment_time: offset.with_ymd_and_hms(2026, 3, 2, 11, 30, 0).single().expect("valid"),
///     service_duration_minutes: None,
/// };
/// let policy = IngestionPolicy::new(5, NonZeroU32::new(30).expect("non-zero"));
///
/// let appointment = validate_appointment(&request, now, &policy).expect("valid request");
/// assert_eq!(appointment.client_name().as_ref(), "Ada");
/// assert_eq!(appointment.appointment_time().to_rfc3339(), "2026-03-02T10:30:00+00:00");
/// assert_eq!(appointment.service_duration_minutes(), 30);
/// ```
pub fn validate_appointment(
    request: &AppointmentRequest,
    now: DateTime<Utc>,
    policy: &IngestionPolicy,
) -> Result<Appointment, Vec<AppointmentRejection>> {
    let Ok(client_name) = ClientName::parse(&request.client_name) else {
        return Err(vec![AppointmentRejection::InvalidClientName]);
    };

    let start = request.appointment_time.with_timezone(&Utc);
    let rejections = timing_rejections(start, now, policy);
    if !rejections.is_empty() {
        return Err(rejections);
    }

    Ok(Appointment::new(
        client_name,
        truncate_to_minute(start),
        policy.resolve_duration(request.service_duration_minutes),
    ))
}

fn timing_rejections(
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    policy: &IngestionPolicy,
) -> Vec<AppointmentRejection> {
    let mut rejections = Vec::new();
    if start < policy.earliest_start(now) {
        rejections.push(AppointmentRejection::NotInFuture);
    }
    if !is_slot_aligned(start) {
        rejections.push(AppointmentRejection::NotOnSlotBoundary);
    }
    rejections
}

fn truncate_to_minute(time: DateTime<Utc>) -> DateTime<Utc> {
    time.with_nanosecond(0)
        .and_then(|truncated| truncated.with_second(0))
        .unwrap_or(time)
}

#[cfg(test)]
#[path = "appointment_validation_tests.rs"]
mod tests;
