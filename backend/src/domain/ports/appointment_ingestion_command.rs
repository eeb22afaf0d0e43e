//! Driving port for booking appointments.
//!
//! Inbound adapters hand an untrusted [`AppointmentRequest`] to this port and
//! receive either the new identifier or the list of reasons it was refused.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AppointmentRejection, AppointmentRequest, ClientName, Error};

/// Result of a completed ingestion attempt.
///
/// Rejections are ordinary outcomes. Infrastructure faults are reported as
/// [`Error`] by the port instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentIngestionOutcome {
    /// The appointment was stored.
    Accepted {
        /// Identifier of the stored appointment.
        appointment_id: Uuid,
    },
    /// The appointment was refused; `errors` is never empty.
    Rejected {
        /// Every reason found, in evaluation order.
        errors: Vec<AppointmentRejection>,
    },
}

impl AppointmentIngestionOutcome {
    /// Whether the appointment was stored.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Identifier of the stored appointment, if any.
    pub fn appointment_id(&self) -> Option<Uuid> {
        match self {
            Self::Accepted { appointment_id } => Some(*appointment_id),
            Self::Rejected { .. } => None,
        }
    }

    /// Client-facing messages for each rejection, empty on success.
    ///
    /// # Examples
    /// ```
    /// use appointments::domain::AppointmentRejection;
    /// use appointments::domain::ports::AppointmentIngestionOutcome;
    ///
    /// let outcome = AppointmentIngestionOutcome::Rejected {
    ///     errors: vec![AppointmentRejection::NotInFuture],
    /// };
    /// assert_eq!(
    ///     outcome.error_messages(),
    ///     vec!["Appointment time must be in the future.".to_owned()]
    /// );
    /// ```
    pub fn error_messages(&self) -> Vec<String> {
        match self {
            Self::Accepted { .. } => Vec::new(),
            Self::Rejected { errors } => errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Driving port for appointment ingestion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentIngestionCommand: Send + Sync {
    /// Validate, check for overlaps, and store a proposed appointment.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use chrono::{DateTime, Duration, Utc};
    /// # use appointments::domain::AppointmentRequest;
    /// # use appointments::domain::ports::{
    /// #     AppointmentIngestionCommand, FixtureAppointmentIngestionCommand,
    /// # };
    /// # async fn example() -> Result<(), appointments::domain::Error> {
    /// let command = FixtureAppointmentIngestionCommand;
    /// let request = AppointmentRequest {
    ///     client_name: "Ada".to_owned(),
    ///     appointment_time: (Utc::now() + Duration::hours(2)).fixed_offset(),
    ///     service_duration_minutes: Some(45),
    /// };
    /// let outcome = command.ingest(request).await?;
    /// assert!(outcome.is_successful());
    /// # Ok(())
    /// # }
    /// ```
    async fn ingest(
        &self,
        request: AppointmentRequest,
    ) -> Result<AppointmentIngestionOutcome, Error>;
}

/// Fixture command that accepts any request with a well-formed client name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentIngestionCommand;

#[async_trait]
impl AppointmentIngestionCommand for FixtureAppointmentIngestionCommand {
    async fn ingest(
        &self,
        request: AppointmentRequest,
    ) -> Result<AppointmentIngestionOutcome, Error> {
        Ok(match ClientName::parse(&request.client_name) {
            Ok(_) => AppointmentIngestionOutcome::Accepted {
                appointment_id: Uuid::new_v4(),
            },
            Err(_) => AppointmentIngestionOutcome::Rejected {
                errors: vec![AppointmentRejection::InvalidClientName],
            },
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{Duration, Utc};
    use rstest::rstest;

    use super::*;

    fn request(client_name: &str) -> AppointmentRequest {
        AppointmentRequest {
            client_name: client_name.to_owned(),
            appointment_time: (Utc::now() + Duration::hours(2)).fixed_offset(),
            service_duration_minutes: None,
        }
    }

    #[rstest]
    fn accepted_outcome_exposes_identifier() {
        let id = Uuid::new_v4();
        let outcome = AppointmentIngestionOutcome::Accepted { appointment_id: id };

        assert!(outcome.is_successful());
        assert_eq!(outcome.appointment_id(), Some(id));
        assert!(outcome.error_messages().is_empty());
    }

    #[rstest]
    fn rejected_outcome_lists_messages_in_order() {
        let outcome = AppointmentIngestionOutcome::Rejected {
            errors: vec![
                AppointmentRejection::NotInFuture,
                AppointmentRejection::NotOnSlotBoundary,
            ],
        };

        assert!(!outcome.is_successful());
        assert_eq!(outcome.appointment_id(), None);
        assert_eq!(
            outcome.error_messages(),
            vec![
                "Appointment time must be in the future.".to_owned(),
                "Appointment must start on the hour or half-hour.".to_owned(),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_command_accepts_plain_names() {
        let outcome = FixtureAppointmentIngestionCommand
            .ingest(request("Ada"))
            .await
            .expect("fixture ingest succeeds");
        assert!(outcome.is_successful());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_command_rejects_control_characters() {
        let outcome = FixtureAppointmentIngestionCommand
            .ingest(request("Ada\u{0}"))
            .await
            .expect("fixture ingest succeeds");
        assert_eq!(
            outcome.error_messages(),
            vec!["Client name contains invalid characters".to_owned()]
        );
    }
}
