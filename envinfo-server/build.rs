//! Stamps envinfo-server with the identity of the build that produced it.
//!
//! Exposes `GIT_HASH`, `BUILD_TIMESTAMP` and `BUILD_PROFILE` to `env!()`,
//! for the startup banner in `main.rs`.

use std::process::Command;

/// Short commit hash of the checkout, or "unknown" outside a git tree
fn git_short_hash() -> String {
    let output = match Command::new("git").args(["rev-parse", "--short=8", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        _ => return "unknown".to_string(),
    };
    String::from_utf8(output.stdout)
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn main() {
    let stamp = [
        ("GIT_HASH", git_short_hash()),
        (
            "BUILD_TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        (
            "BUILD_PROFILE",
            std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
        ),
    ];

    for (key, value) in stamp {
        println!("cargo:rustc-env={}={}", key, value);
    }

    // Deliberately no rerun-if-changed: the stamp is refreshed on every build
}
