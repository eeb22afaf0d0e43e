//! Driving port for appointment reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Appointment, Error};

/// Read projection of a stored appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    /// Trimmed client name.
    pub client_name: String,
    /// Start instant in UTC, whole minutes only.
    pub appointment_time: DateTime<Utc>,
    /// Booked length in minutes.
    pub service_duration_minutes: u32,
}

impl From<Appointment> for AppointmentView {
    fn from(value: Appointment) -> Self {
        Self {
            appointment_time: value.appointment_time(),
            service_duration_minutes: value.service_duration_minutes(),
            client_name: value.client_name().to_string(),
        }
    }
}

/// Driving port for looking up appointments.
///
/// # Examples
///
/// ```rust,no_run
/// # use appointments::domain::ports::{AppointmentQuery, FixtureAppointmentQuery};
/// # async fn example() -> Result<(), appointments::domain::Error> {
/// let query = FixtureAppointmentQuery;
/// let view = query.get_by_id(uuid::Uuid::new_v4()).await?;
/// assert!(view.is_none());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    /// Fetch one appointment. `Ok(None)` means no appointment has that id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<AppointmentView>, Error>;
}

/// Fixture query for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentQuery;

#[async_trait]
impl AppointmentQuery for FixtureAppointmentQuery {
    async fn get_by_id(&self, _id: Uuid) -> Result<Option<AppointmentView>, Error> {
        Ok(None)
    }
}
