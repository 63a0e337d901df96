//! Tests for environment info resolution against the real process environment
//!
//! Uses serial_test to prevent ENV variable race conditions. Every test that
//! touches ENVIRONMENT or VERSION is marked #[serial].

use envinfo_common::config::{ENVIRONMENT_VAR, VERSION_VAR};
use envinfo_common::{EnvironmentInfo, EnvironmentSource, ProcessEnvironment, StaticEnvironment};
use serial_test::serial;
use std::env;

fn clear_vars() {
    env::remove_var(ENVIRONMENT_VAR);
    env::remove_var(VERSION_VAR);
}

#[test]
#[serial]
fn test_process_env_unset_uses_defaults() {
    clear_vars();

    let info = EnvironmentInfo::from_process_env();
    assert_eq!(info.environment, "development");
    assert_eq!(info.version, "SNAPSHOT");
}

#[test]
#[serial]
fn test_process_env_values_passed_through() {
    env::set_var(ENVIRONMENT_VAR, "production");
    env::set_var(VERSION_VAR, "1.0.0");

    let info = ProcessEnvironment.snapshot();

    clear_vars();

    assert_eq!(info, EnvironmentInfo::new("production", "1.0.0"));
}

#[test]
#[serial]
fn test_process_env_empty_values_use_defaults() {
    env::set_var(ENVIRONMENT_VAR, "");
    env::set_var(VERSION_VAR, "");

    let info = ProcessEnvironment.snapshot();

    clear_vars();

    assert_eq!(info, EnvironmentInfo::default());
}

#[test]
#[serial]
fn test_process_environment_sees_changes_between_snapshots() {
    let source = ProcessEnvironment;

    env::set_var(ENVIRONMENT_VAR, "staging");
    let first = source.snapshot();

    env::set_var(ENVIRONMENT_VAR, "production");
    let second = source.snapshot();

    clear_vars();

    assert_eq!(first.environment, "staging");
    assert_eq!(second.environment, "production");
}

#[test]
#[serial]
fn test_static_environment_capture_ignores_later_changes() {
    env::set_var(ENVIRONMENT_VAR, "canary");
    env::set_var(VERSION_VAR, "9.9.9");
    let source = StaticEnvironment::capture();

    clear_vars();

    assert_eq!(source.snapshot(), EnvironmentInfo::new("canary", "9.9.9"));
}
