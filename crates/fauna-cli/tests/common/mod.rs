#![allow(dead_code)]

use std::process::{Command, Output};

/// Collection used by the CLI's defaults.
pub const TEST_COLLECTION: &str = "login_test";

/// Get hosted-database credentials from environment.
/// Returns None if not set, causing tests to be skipped.
pub fn get_test_secret() -> Option<String> {
    std::env::var("FAUNA_TEST_SECRET").ok()
}

/// Run the CLI against the given endpoint.
pub fn run_cli_with_endpoint(args: &[&str], endpoint: &str, secret: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fauna"));
    cmd.args(args);
    cmd.env("FAUNA_ENDPOINT", endpoint);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    match secret {
        Some(secret) => cmd.env("FAUNA_SECRET", secret),
        None => cmd.env_remove("FAUNA_SECRET"),
    };
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against the given endpoint and expect success.
pub fn run_cli_with_endpoint_success(args: &[&str], endpoint: &str, secret: Option<&str>) -> String {
    let output = run_cli_with_endpoint(args, endpoint, secret);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Parse the record JSON `create-user` prints on its first line.
pub fn created_record(stdout: &str) -> serde_json::Value {
    let line = stdout.lines().next().expect("create-user printed nothing");
    serde_json::from_str(line).expect("create-user did not print a JSON record")
}
