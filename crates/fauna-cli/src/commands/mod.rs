//! Command implementations.

pub mod create_user;
pub mod login;
