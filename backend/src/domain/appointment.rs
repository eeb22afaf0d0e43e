//! Appointment entity and value objects.
//!
//! An [`Appointment`] is only produced by the validator
//! ([`crate::domain::validate_appointment`]) or rehydrated through
//! [`Appointment::from_parts`], so every instance upholds:
//!
//! - the client name is trimmed and free of control characters;
//! - the start time is UTC, has no seconds or sub-second component, and falls
//!   on :00 or :30;
//! - the service duration is strictly positive;
//! - the identifier never changes after construction.

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};
use uuid::Uuid;

/// Errors raised when rehydrating an appointment from stored parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentValidationError {
    /// The client name contains control characters.
    #[error("client name contains control characters")]
    ClientNameControlCharacters,
    /// The client name carries leading or trailing whitespace.
    #[error("client name must be trimmed")]
    ClientNameNotTrimmed,
    /// The start time has a seconds or sub-second component.
    #[error("appointment time must be truncated to whole minutes")]
    NotMinuteAligned,
    /// The start time does not fall on the hour or half-hour.
    #[error("appointment time must start on the hour or half-hour")]
    NotSlotAligned,
    /// The service duration is zero.
    #[error("service duration must be positive")]
    ZeroDuration,
}

/// Client name with surrounding whitespace removed and no control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Trim `raw` and reject it if any control character remains.
    ///
    /// Trimming happens first, so trailing newlines or tabs are accepted and
    /// stripped while embedded ones are rejected.
    ///
    /// # Examples
    /// ```
    /// use appointments::domain::ClientName;
    ///
    /// let name = ClientName::parse("  Ada Lovelace\n").expect("valid name");
    /// assert_eq!(name.as_ref(), "Ada Lovelace");
    /// assert!(ClientName::parse("Ada\u{7}Lovelace").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AppointmentValidationError> {
        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_control) {
            return Err(AppointmentValidationError::ClientNameControlCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    fn from_stored(value: String) -> Result<Self, AppointmentValidationError> {
        if value.trim() != value {
            return Err(AppointmentValidationError::ClientNameNotTrimmed);
        }
        Self::parse(&value)
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ClientName> for String {
    fn from(value: ClientName) -> Self {
        value.0
    }
}

/// Untrusted appointment proposal as received from a client.
///
/// Presence of `client_name` and `appointment_time` is enforced by the
/// inbound adapter before the request reaches the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    /// Name as typed by the client, untrimmed.
    pub client_name: String,
    /// Requested start with the client's UTC offset.
    pub appointment_time: DateTime<FixedOffset>,
    /// Requested length; absent or `<= 0` selects the configured default.
    pub service_duration_minutes: Option<i32>,
}

/// A validated, bookable appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: Uuid,
    client_name: ClientName,
    appointment_time: DateTime<Utc>,
    service_duration_minutes: NonZeroU32,
}

impl Appointment {
    pub(crate) fn new(
        client_name: ClientName,
        appointment_time: DateTime<Utc>,
        service_duration_minutes: NonZeroU32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            appointment_time,
            service_duration_minutes,
        }
    }

    /// Rebuild an appointment from stored fields, re-checking every invariant.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use uuid::Uuid;
    /// use appointments::domain::Appointment;
    ///
    /// let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).single().expect("valid");
    /// let appointment = Appointment::from_parts(Uuid::new_v4(), "Ada".to_owned(), start, 45)
    ///     .expect("valid appointment");
    /// assert_eq!(appointment.service_duration_minutes(), 45);
    /// ```
    pub fn from_parts(
        id: Uuid,
        client_name: String,
        appointment_time: DateTime<Utc>,
        service_duration_minutes: u32,
    ) -> Result<Self, AppointmentValidationError> {
        let client_name = ClientName::from_stored(client_name)?;
        if appointment_time.second() != 0 || appointment_time.nanosecond() != 0 {
            return Err(AppointmentValidationError::NotMinuteAligned);
        }
        if !is_slot_aligned(appointment_time) {
            return Err(AppointmentValidationError::NotSlotAligned);
        }
        let service_duration_minutes = NonZeroU32::new(service_duration_minutes)
            .ok_or(AppointmentValidationError::ZeroDuration)?;

        Ok(Self {
            id,
            client_name,
            appointment_time,
            service_duration_minutes,
        })
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Trimmed client name.
    pub fn client_name(&self) -> &ClientName {
        &self.client_name
    }

    /// Start instant in UTC, truncated to the minute.
    pub fn appointment_time(&self) -> DateTime<Utc> {
        self.appointment_time
    }

    /// Service length in minutes.
    pub fn service_duration_minutes(&self) -> u32 {
        self.service_duration_minutes.get()
    }

    /// Exclusive end of the booked interval.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.appointment_time + self.service_duration()
    }

    pub(crate) fn service_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.service_duration_minutes.get()))
    }
}

/// Whether `time` starts on the hour or half-hour.
pub(crate) fn is_slot_aligned(time: DateTime<Utc>) -> bool {
    matches!(time.minute(), 0 | 30)
}
