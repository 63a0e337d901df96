//! Environment info resolution
//!
//! The deployment tier and build identifier come from two environment
//! variables. Resolution order per value:
//! 1. Variable set to a non-empty string (passed through unchanged)
//! 2. Compiled default (variable unset, empty, or not valid Unicode)

use serde::{Deserialize, Serialize};

/// Variable holding the deployment tier
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Variable holding the build/release identifier
pub const VERSION_VAR: &str = "VERSION";

/// Deployment tier used when `ENVIRONMENT` is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Build identifier used when `VERSION` is unset or empty
pub const DEFAULT_VERSION: &str = "SNAPSHOT";

/// Environment info payload served by `GET /environment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    /// Deployment tier (e.g. "development", "production")
    pub environment: String,
    /// Build/release identifier
    pub version: String,
}

impl EnvironmentInfo {
    pub fn new(environment: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            version: version.into(),
        }
    }

    /// Resolve both values through `lookup`, applying defaults
    ///
    /// `lookup` receives the variable name and returns its raw value, if any.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: resolve_value(lookup(ENVIRONMENT_VAR), DEFAULT_ENVIRONMENT),
            version: resolve_value(lookup(VERSION_VAR), DEFAULT_VERSION),
        }
    }

    /// Resolve from the current process environment
    pub fn from_process_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT, DEFAULT_VERSION)
    }
}

/// Apply the default to an absent or empty raw value
pub fn resolve_value(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Source of environment info snapshots, held by the HTTP layer
///
/// Each call produces an independent snapshot.
pub trait EnvironmentSource: Send + Sync {
    fn snapshot(&self) -> EnvironmentInfo;
}

/// Reads the process environment on every snapshot
///
/// Changes to `ENVIRONMENT`/`VERSION` during the process lifetime are
/// visible on the next snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn snapshot(&self) -> EnvironmentInfo {
        EnvironmentInfo::from_process_env()
    }
}

/// Serves a fixed, already resolved [`EnvironmentInfo`]
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    info: EnvironmentInfo,
}

impl StaticEnvironment {
    pub fn new(info: EnvironmentInfo) -> Self {
        Self { info }
    }

    /// Resolve once from the process environment and freeze the result
    pub fn capture() -> Self {
        Self::new(EnvironmentInfo::from_process_env())
    }
}

impl From<EnvironmentInfo> for StaticEnvironment {
    fn from(info: EnvironmentInfo) -> Self {
        Self::new(info)
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn snapshot(&self) -> EnvironmentInfo {
        self.info.clone()
    }
}
