//! fauna-file - Filesystem-backed database implementation.
//!
//! Emulates the hosted database's create and login semantics on the local
//! filesystem, for development and tests.

mod database;
mod store;

pub use database::{DEFAULT_UNIQUE_FIELD, FileDatabase};
pub use store::{FileStore, StoredDocument};
