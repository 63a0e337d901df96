//! # envinfo Common Library
//!
//! Shared code for the envinfo service:
//! - Environment info resolution (deployment tier and build identifier)
//! - Configuration sources injected into the HTTP layer
//! - Tracing initialization

pub mod config;
pub mod logging;

pub use config::{EnvironmentInfo, EnvironmentSource, ProcessEnvironment, StaticEnvironment};
