//! Appointment ingestion service.
//!
//! Implements both driving ports over an [`AppointmentRepository`]: requests
//! are validated, checked against every stored booking, and saved. Each
//! refusal and lookup miss is reported through the [`IngestionLogger`] before
//! the outcome is returned.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    AppointmentIngestionCommand, AppointmentIngestionOutcome, AppointmentQuery,
    AppointmentRepository, AppointmentRepositoryError, AppointmentView, IngestionLogger,
};
use crate::domain::{
    AppointmentRejection, AppointmentRequest, Error, IngestionPolicy, check_overlap,
    validate_appointment,
};

fn map_repository_error(error: AppointmentRepositoryError) -> Error {
    match error {
        AppointmentRepositoryError::Connection { message } => {
            Error::internal(format!("appointment repository unavailable: {message}"))
        }
        AppointmentRepositoryError::Query { message } => {
            Error::internal(format!("appointment repository error: {message}"))
        }
    }
}

/// Domain service implementing appointment ingestion and lookup.
#[derive(Clone)]
pub struct AppointmentIngestionService<R> {
    repository: Arc<R>,
    logger: Arc<dyn IngestionLogger>,
    clock: Arc<dyn Clock>,
    policy: IngestionPolicy,
}

impl<R> AppointmentIngestionService<R> {
    /// Create a service over `repository`, reading "now" from `clock`.
    pub fn new(
        repository: Arc<R>,
        logger: Arc<dyn IngestionLogger>,
        clock: Arc<dyn Clock>,
        policy: IngestionPolicy,
    ) -> Self {
        Self {
            repository,
            logger,
            clock,
            policy,
        }
    }

    fn reject_invalid(&self, errors: Vec<AppointmentRejection>) -> AppointmentIngestionOutcome {
        self.logger.log(&format!(
            "Error - appointment not ingested due to {} validation failures:",
            errors.len()
        ));
        for error in &errors {
            self.logger.log(&error.to_string());
        }
        AppointmentIngestionOutcome::Rejected { errors }
    }

    fn reject_overlap(&self, error: AppointmentRejection) -> AppointmentIngestionOutcome {
        self.logger.log("Error - appointment not ingested due to appointment overlap");
        self.logger.log(&error.to_string());
        AppointmentIngestionOutcome::Rejected {
            errors: vec![error],
        }
    }
}

#[async_trait]
impl<R> AppointmentIngestionCommand for AppointmentIngestionService<R>
where
    R: AppointmentRepository,
{
    async fn ingest(
        &self,
        request: AppointmentRequest,
    ) -> Result<AppointmentIngestionOutcome, Error> {
        let appointment = match validate_appointment(&request, self.clock.utc(), &self.policy) {
            Ok(appointment) => appointment,
            Err(errors) => return Ok(self.reject_invalid(errors)),
        };

        let existing = self
            .repository
            .list_all()
            .await
            .map_err(map_repository_error)?;
        if let Err(error) = check_overlap(&appointment, &existing) {
            return Ok(self.reject_overlap(error));
        }

        let appointment_id = self
            .repository
            .save(&appointment)
            .await
            .map_err(map_repository_error)?;
        tracing::debug!(%appointment_id, "appointment stored");

        Ok(AppointmentIngestionOutcome::Accepted { appointment_id })
    }
}

#[async_trait]
impl<R> AppointmentQuery for AppointmentIngestionService<R>
where
    R: AppointmentRepository,
{
    async fn get_by_id(&self, id: Uuid) -> Result<Option<AppointmentView>, Error> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if found.is_none() {
            self.logger.log(&format!("Error - appointment {id} not found"));
        }
        Ok(found.map(AppointmentView::from))
    }
}

#[cfg(test)]
#[path = "appointment_service_tests.rs"]
mod tests;
