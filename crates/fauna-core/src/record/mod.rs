//! User documents and session tokens.
//!
//! This module defines the values exchanged with the database.
//! The operations themselves are methods on [`Database`](crate::Database).

mod types;
mod user_data;

pub use types::{NewUser, SessionToken, UserRecord};
pub use user_data::UserData;
