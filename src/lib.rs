//! # Transcript Gateway
//!
//! An HTTP service that sends a conversation transcript to a hosted LLM and
//! returns the key information extracted from it.
//!
//! The interesting part is the LLM call gateway:
//!
//! - **Routing**: `(provider, mode)` resolves to a deployment and an invocation
//!   shape; unknown providers are substituted, unknown modes fail fast.
//! - **Retry**: every provider call runs under exponential backoff with capped
//!   jitter.
//! - **Decoding**: schema-constrained requests are decoded into a JSON mapping.
//! - **Error taxonomy**: every failure leaves the gateway as a classified
//!   [`ServiceError`] with a fixed HTTP code.
//!
//! ## Gateway
//!
//! ```rust,no_run
//! use transcript_gateway::{Config, Gateway, GenerationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = Gateway::from_config(&config)?;
//!
//!     let request = GenerationRequest::new("You are terse.", "Say hello.")
//!         .with_temperature(0.2);
//!     let result = gateway.generate(&request).await?;
//!     println!("{:?}", result.as_text());
//!     Ok(())
//! }
//! ```
//!
//! ## Server
//!
//! ```rust,no_run
//! use transcript_gateway::{Config, server::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{
    Gateway, GenerationRequest, GenerationResult, InvocationShape, Mode, ModelRouter,
    ResponseFormat, Route, RouteError,
};
pub use core::providers::{AzureClient, LlmProvider};
pub use services::{ExtractionService, FileReader, InformationExtractor};
pub use utils::error::{
    Backoff, ErrorKind, GatewayError, JitterSource, Result, RetryConfig, RetryPolicy,
    ServiceError,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Unix timestamp of the build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
