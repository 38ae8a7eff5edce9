//! Core functionality for the gateway
//!
//! Request types, routing, provider clients and the facade tying them together.

pub mod gateway;
pub mod providers;
pub mod router;
pub mod types;

pub use gateway::Gateway;
pub use router::{ModelRouter, Route, RouteError};
pub use types::{GenerationRequest, GenerationResult, InvocationShape, Mode, ResponseFormat};
