//! Adapts Lambda invocations to registered handlers.

use chrono::Utc;
use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::config::FunctionConfig;
use crate::context::ClientContext;
use crate::registry::{EntryPoint, FunctionRequest};
use crate::response::FunctionResponse;

/// Current time in fractional seconds since the epoch.
pub fn now_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Run `entry` against one Lambda event.
///
/// The client context is read from the event's `custom` map; see
/// [`ClientContext::from_platform`].
pub fn invoke(
    event: LambdaEvent<Value>,
    entry: &EntryPoint,
    config: &FunctionConfig,
    now: f64,
) -> FunctionResponse {
    let LambdaEvent { payload, context } = event;
    let custom = context.client_context.as_ref().map(|c| &c.custom);

    let request = FunctionRequest {
        event: payload,
        context: ClientContext::from_platform(custom),
        config,
        now,
    };

    (entry.handler)(&request)
}
