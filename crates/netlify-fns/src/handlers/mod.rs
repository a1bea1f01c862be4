//! Request handlers, one module per entry point.

pub mod faunakey;
pub mod hello;
