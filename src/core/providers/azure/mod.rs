//! Azure OpenAI provider
//!
//! Chat completions against an Azure OpenAI resource, addressed by deployment.

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod utils;

pub use client::AzureClient;
pub use config::AzureConfig;
pub use error::AzureErrorMapper;
pub use utils::AzureUtils;

/// Provider id reported for every Azure failure
pub const PROVIDER_NAME: &str = "openai";
