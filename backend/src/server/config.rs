//! HTTP server configuration object.

use std::net::SocketAddr;

use appointments::domain::IngestionPolicy;

/// Validated configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) policy: IngestionPolicy,
}

impl ServerConfig {
    /// Bundle a validated bind address and ingestion policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, policy: IngestionPolicy) -> Self {
        Self { bind_addr, policy }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
