//! Output formatting for command results.
//!
//! Results go to stdout, progress and diagnostics to stderr.

use anyhow::Result;
use colored::Colorize;

use fauna_core::{SessionToken, UserRecord};

/// Print progress on stderr.
pub fn progress(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a created record as one line of JSON, then a summary line.
pub fn record(record: &UserRecord) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    println!("{} Created user: {}", "✓".green(), record.reference);
    Ok(())
}

/// Print a session token under the `done` marker.
pub fn token(token: &SessionToken) {
    println!("done");
    field("id", &token.id);
    field("instance", &token.instance.to_string());
    field("ts", &token.ts.to_string());
    field("secret", token.secret.expose());
}

/// Print the `error` marker for a refused login.
pub fn login_failed() {
    println!("error");
}

fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}
