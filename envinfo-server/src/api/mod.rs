//! HTTP API handlers for envinfo-server

pub mod environment;

pub use environment::{environment_routes, get_environment, reject_method};
