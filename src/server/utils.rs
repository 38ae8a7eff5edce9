//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io;

impl HttpServer {
    /// Turn a bind failure into an actionable start-up error
    pub(crate) fn format_bind_error(error: io::Error, bind_addr: &str, port: u16) -> GatewayError {
        match error.kind() {
            io::ErrorKind::AddrInUse => GatewayError::server(format!(
                "Port {} is already in use; stop the other process or start with --port {}",
                port,
                port.saturating_add(1)
            )),
            io::ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Permission denied for port {}; use a port >= 1024 such as --port 8000",
                port
            )),
            _ => GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
