//! Persistence adapters implementing the appointment repository port.
//!
//! Appointments live in process memory and are lost on restart.

mod in_memory_appointment_repository;

pub use in_memory_appointment_repository::InMemoryAppointmentRepository;
