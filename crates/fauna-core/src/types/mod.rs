//! Core database types.
//!
//! These types enforce wire-format invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod collection;
mod database_url;
mod record_ref;

pub use collection::CollectionName;
pub use database_url::DatabaseUrl;
pub use record_ref::RecordRef;
