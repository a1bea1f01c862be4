//! CLI tests against the hosted database.
//!
//! These tests require FAUNA_TEST_SECRET and optionally FAUNA_TEST_ENDPOINT.
//! They are skipped if the secret is not set.

mod common;

use std::time::{SystemTime, UNIX_EPOCH};

use common::{created_record, get_test_secret, run_cli_with_endpoint, run_cli_with_endpoint_success};

fn endpoint() -> String {
    std::env::var("FAUNA_TEST_ENDPOINT").unwrap_or_else(|_| "https://db.fauna.com".to_string())
}

fn unique_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("player {}", nanos)
}

#[test]
fn test_hosted_create_and_login() {
    let Some(secret) = get_test_secret() else {
        eprintln!("Skipping: FAUNA_TEST_SECRET not set");
        return;
    };
    let endpoint = endpoint();
    let name = unique_name();

    let created = run_cli_with_endpoint_success(
        &["create-user", "--name", &name, "--password", "Password"],
        &endpoint,
        Some(&secret),
    );
    let record = created_record(&created);
    assert_eq!(record["data"]["name"], name.as_str());

    let reference = record["ref"].as_str().unwrap();
    let (collection, id) = reference.rsplit_once('/').unwrap();

    let stdout = run_cli_with_endpoint_success(
        &["login", "--collection", collection, "--id", id],
        &endpoint,
        Some(&secret),
    );
    assert_eq!(stdout.lines().next(), Some("done"));

    let output = run_cli_with_endpoint(
        &["login", "--collection", collection, "--id", id, "--password", "wrong"],
        &endpoint,
        Some(&secret),
    );
    assert!(!output.status.success());
}
