//! fauna-http - HTTP-backed database implementation.

mod client;
mod database;
mod wire;

pub use client::QueryClient;
pub use database::HttpDatabase;
