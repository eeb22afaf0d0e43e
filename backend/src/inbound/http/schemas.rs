//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here describe their
//! serialised shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ports::AppointmentView`].
#[derive(ToSchema)]
#[schema(as = AppointmentView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AppointmentViewSchema {
    /// Trimmed client name.
    #[schema(example = "Ada Lovelace")]
    client_name: String,
    /// Start time in UTC.
    #[schema(value_type = String, format = DateTime, example = "2026-03-02T10:30:00Z")]
    appointment_time: String,
    /// Booked length in minutes.
    #[schema(example = 30, minimum = 1)]
    service_duration_minutes: u32,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;
    use utoipa::PartialSchema;

    use super::*;

    #[rstest]
    fn appointment_view_schema_uses_wire_names() {
        let schema_json =
            serde_json::to_string(&AppointmentViewSchema::schema()).expect("schema serialises");

        assert_eq!(AppointmentViewSchema::name(), "AppointmentView");
        for field in ["clientName", "appointmentTime", "serviceDurationMinutes"] {
            assert!(schema_json.contains(field), "schema should contain {field}");
        }
    }
}
