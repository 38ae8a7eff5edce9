//! Integration tests
//!
//! Components are wired the way the binary wires them. The only stand-in is
//! the Azure endpoint, served by `wiremock`.

pub mod config_tests;
pub mod endpoint_tests;
pub mod gateway_tests;
