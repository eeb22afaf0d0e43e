//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `APPOINTMENTS_*` environment variables, command-line flags,
//! or a configuration file, and are validated once at start-up.

use std::net::SocketAddr;
use std::num::NonZeroU32;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::IngestionPolicy;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Errors raised while turning raw settings into runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The default service duration was configured as zero minutes.
    #[error("default_service_duration_minutes must be greater than zero")]
    ZeroDefaultDuration,
    /// The bind address is not a `host:port` socket address.
    #[error("bind_address {value:?} is not a socket address: {source}")]
    InvalidBindAddress {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Raw configuration values for the appointment service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APPOINTMENTS")]
pub struct AppointmentSettings {
    /// Minimum lead time, in minutes, before an appointment may start.
    #[ortho_config(default = 5)]
    pub future_threshold_minutes: u32,
    /// Duration applied when a request omits one or gives a value `<= 0`.
    #[ortho_config(default = 30)]
    pub default_service_duration_minutes: u32,
    /// Socket address the HTTP server listens on.
    pub bind_address: Option<String>,
}

impl AppointmentSettings {
    /// Validated ingestion rules.
    ///
    /// # Errors
    /// [`SettingsError::ZeroDefaultDuration`] when the default duration is 0.
    pub fn ingestion_policy(&self) -> Result<IngestionPolicy, SettingsError> {
        let default_duration = NonZeroU32::new(self.default_service_duration_minutes)
            .ok_or(SettingsError::ZeroDefaultDuration)?;
        Ok(IngestionPolicy::new(
            self.future_threshold_minutes,
            default_duration,
        ))
    }

    /// Parsed listen address, `0.0.0.0:8080` when unset.
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddress`] when the value does not parse.
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddress {
                value: value.to_owned(),
                source,
            })
    }
}
