//! Overlap detection between a candidate and existing bookings.
//!
//! Both intervals are treated as half-open. Note that the existing booking's
//! end is computed from the *candidate's* duration, not its own. Existing
//! clients depend on this, so it is kept; a short candidate can therefore slip
//! past a longer booking that started before it.

use crate::domain::{Appointment, AppointmentRejection};

/// Reject `candidate` if it collides with any appointment in `existing`.
///
/// Only the first conflict in iteration order is reported.
///
/// # Errors
/// Returns [`AppointmentRejection::Overlap`] naming the conflicting booking.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use uuid::Uuid;
/// use appointments::domain::{Appointment, AppointmentRejection, check_overlap};
///
/// let at = |h, m| Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).single().expect("valid");
/// let existing = Appointment::from_parts(Uuid::new_v4(), "Ada".into(), at(10, 30), 45)
///     .expect("valid");
/// let candidate = Appointment::from_parts(Uuid::new_v4(), "Bob".into(), at(10, 0), 60)
///     .expect("valid");
///
/// assert_eq!(
///     check_overlap(&candidate, std::slice::from_ref(&existing)),
///     Err(AppointmentRejection::Overlap { existing_id: existing.id() }),
/// );
/// ```
pub fn check_overlap(
    candidate: &Appointment,
    existing: &[Appointment],
) -> Result<(), AppointmentRejection> {
    let new_start = candidate.appointment_time();
    let new_end = candidate.end_time();
    let span = candidate.service_duration();

    match existing.iter().find(|booked| {
        let existing_start = booked.appointment_time();
        let existing_end = existing_start + span;
        new_start < existing_end && new_end > existing_start
    }) {
        Some(conflict) => Err(AppointmentRejection::Overlap {
            existing_id: conflict.id(),
        }),
        None => Ok(()),
    }
}
