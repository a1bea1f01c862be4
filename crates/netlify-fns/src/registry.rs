//! Entry-point registry.
//!
//! Maps the names the platform invokes functions by to their handlers.
//! Names are checked for uniqueness at compile time.

use serde_json::Value;

use crate::config::FunctionConfig;
use crate::context::ClientContext;
use crate::handlers;
use crate::response::FunctionResponse;

/// Everything a handler sees for one invocation.
#[derive(Debug, Clone)]
pub struct FunctionRequest<'a> {
    /// The raw event payload.
    pub event: Value,

    /// Identity information forwarded by the platform.
    pub context: ClientContext,

    pub config: &'a FunctionConfig,

    /// Invocation time in fractional seconds since the epoch.
    pub now: f64,
}

pub type Handler = fn(&FunctionRequest<'_>) -> FunctionResponse;

/// A named handler.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoint {
    pub name: &'static str,
    pub handler: Handler,
}

/// All deployable functions.
pub const ENTRY_POINTS: &[EntryPoint] = &[
    EntryPoint {
        name: "faunakey",
        handler: handlers::faunakey::handle,
    },
    EntryPoint {
        name: "hello",
        handler: handlers::hello::handle,
    },
];

const _: () = assert!(
    names_are_unique(ENTRY_POINTS),
    "duplicate entry point name"
);

/// Find the entry point registered under `name`.
pub fn lookup(name: &str) -> Option<&'static EntryPoint> {
    ENTRY_POINTS.iter().find(|entry| entry.name == name)
}

const fn names_are_unique(entries: &[EntryPoint]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if str_eq(entries[i].name, entries[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
