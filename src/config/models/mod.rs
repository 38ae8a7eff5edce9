//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod gateway;
pub mod llm;
pub mod logging;
pub mod retry;
pub mod server;

pub use gateway::*;
pub use llm::*;
pub use logging::*;
pub use retry::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default maximum retries per provider call
pub fn default_max_retries() -> u32 {
    3
}

/// Default provider request timeout in seconds
pub fn default_llm_timeout() -> u64 {
    60
}
