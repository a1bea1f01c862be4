//! Core traits for database behavior.

mod database;

pub use database::Database;
