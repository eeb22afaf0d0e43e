//! Port for appointment persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Appointment;

use super::define_port_error;

define_port_error! {
    /// Errors raised by appointment repository adapters.
    pub enum AppointmentRepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "appointment repository connection failed: {message}",
        /// A read or write failed during execution.
        Query { message: String } =>
            "appointment repository query failed: {message}",
    }
}

/// Port for storing and reading appointments.
///
/// `list_all` followed by `save` is not atomic. Two concurrent ingestions of
/// overlapping slots may both be stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find an appointment by id.
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError>;

    /// Every stored appointment, in no particular order.
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentRepositoryError>;

    /// Insert `appointment` and return its identifier.
    async fn save(&self, appointment: &Appointment) -> Result<Uuid, AppointmentRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Nothing is stored: lookups miss and listings are empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentRepository;

#[async_trait]
impl AppointmentRepository for FixtureAppointmentRepository {
    async fn find_by_id(
        &self,
        _id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, appointment: &Appointment) -> Result<Uuid, AppointmentRepositoryError> {
        Ok(appointment.id())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    fn sample_appointment() -> Appointment {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        Appointment::from_parts(Uuid::new_v4(), "Ada".to_owned(), start, 30)
            .expect("valid fixture appointment")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixtureAppointmentRepository;
        let found = repo
            .find_by_id(Uuid::new_v4())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let repo = FixtureAppointmentRepository;
        let listed = repo.list_all().await.expect("fixture list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_echoes_identifier() {
        let repo = FixtureAppointmentRepository;
        let appointment = sample_appointment();

        let id = repo.save(&appointment).await.expect("fixture save succeeds");
        assert_eq!(id, appointment.id());
    }

    #[rstest]
    #[case(AppointmentRepositoryError::connection("refused"), "connection failed: refused")]
    #[case(AppointmentRepositoryError::query("poisoned"), "query failed: poisoned")]
    fn errors_format_message(#[case] err: AppointmentRepositoryError, #[case] expected: &str) {
        assert!(err.to_string().ends_with(expected));
    }
}
