//! CLI integration tests against the file-backed database.

mod common;

use std::path::Path;

use tempfile::TempDir;
use url::Url;

use common::{
    TEST_COLLECTION, created_record, run_cli_with_endpoint, run_cli_with_endpoint_success,
};

fn file_database_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

fn id_of(record: &serde_json::Value) -> String {
    let reference = record["ref"].as_str().expect("record has no ref");
    let (collection, id) = reference.rsplit_once('/').expect("ref is collection/id");
    assert_eq!(collection, TEST_COLLECTION);
    id.to_string()
}

#[test]
fn test_file_database_create_user() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    let stdout = run_cli_with_endpoint_success(&["create-user"], &url, None);

    let record = created_record(&stdout);
    assert_eq!(record["data"]["name"], "player 1");
    assert!(record["ts"].as_i64().unwrap() > 0);
    id_of(&record);
    assert!(!stdout.contains("Password"));
}

#[test]
fn test_file_database_create_user_with_data() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    let stdout = run_cli_with_endpoint_success(
        &["create-user", "--data", r#"{"name":"player 2","team":{"colour":"red"}}"#],
        &url,
        None,
    );

    let record = created_record(&stdout);
    assert_eq!(record["data"]["name"], "player 2");
    assert_eq!(record["data"]["team"]["colour"], "red");
}

#[test]
fn test_file_database_duplicate_user_fails() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    run_cli_with_endpoint_success(&["create-user"], &url, None);

    let output = run_cli_with_endpoint(&["create-user", "--password", "Other"], &url, None);
    assert!(!output.status.success(), "duplicate create succeeded");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("instance not unique"), "stderr: {}", stderr);
}

#[test]
fn test_file_database_login() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    let created = run_cli_with_endpoint_success(&["create-user"], &url, None);
    let id = id_of(&created_record(&created));

    let stdout = run_cli_with_endpoint_success(&["login", "--id", &id], &url, None);

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("done"));
    assert!(stdout.contains(&format!("instance: {}/{}", TEST_COLLECTION, id)));
    assert!(stdout.contains("secret: fnl"));
}

#[test]
fn test_file_database_login_wrong_password() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    let created = run_cli_with_endpoint_success(&["create-user"], &url, None);
    let id = id_of(&created_record(&created));

    let output = run_cli_with_endpoint(
        &["login", "--id", &id, "--password", "password"],
        &url,
        None,
    );
    assert!(!output.status.success(), "login with wrong password succeeded");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("error"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("authentication failed"), "stderr: {}", stderr);
}

#[test]
fn test_file_database_login_unknown_id() {
    let temp_dir = TempDir::new().unwrap();
    let url = file_database_url(&temp_dir.path().join("db"));

    // The default id was never created in a fresh database.
    let output = run_cli_with_endpoint(&["login"], &url, None);
    assert!(!output.status.success());
}

#[test]
fn test_file_database_rejects_dot_collections() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("db");
    let url = file_database_url(&root);

    for collection in ["..", ".", ".hidden"] {
        let output =
            run_cli_with_endpoint(&["create-user", "--collection", collection], &url, None);
        assert!(!output.status.success(), "collection {:?} accepted", collection);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid collection name"), "stderr: {}", stderr);
    }

    // Nothing was written anywhere under the database root.
    assert!(!root.join("db").exists());
}

#[test]
fn test_network_endpoint_without_secret_fails() {
    let output = run_cli_with_endpoint(&["create-user"], "https://db.fauna.com", None);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FAUNA_SECRET"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_endpoint_fails() {
    let output = run_cli_with_endpoint(&["login"], "http://db.fauna.com", None);
    assert!(!output.status.success());
}
