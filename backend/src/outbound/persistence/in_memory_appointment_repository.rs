//! Process-local appointment store backed by `DashMap`.
//!
//! Each call is atomic on its own; `list_all` then `save` is not.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::domain::Appointment;
use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};

/// In-memory [`AppointmentRepository`] shared across Actix workers.
///
/// # Examples
/// ```
/// use appointments::outbound::persistence::InMemoryAppointmentRepository;
///
/// let repository = InMemoryAppointmentRepository::new();
/// assert!(repository.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: DashMap<Uuid, Appointment>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored appointments.
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        Ok(self.appointments.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        Ok(self
            .appointments
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn save(&self, appointment: &Appointment) -> Result<Uuid, AppointmentRepositoryError> {
        match self.appointments.entry(appointment.id()) {
            Entry::Occupied(_) => Err(AppointmentRepositoryError::query(format!(
                "appointment {} already exists",
                appointment.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(appointment.clone());
                Ok(appointment.id())
            }
        }
    }
}
