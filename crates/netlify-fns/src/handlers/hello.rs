//! Greets every caller.

use tracing::info;

use crate::registry::FunctionRequest;
use crate::response::FunctionResponse;

pub fn handle(request: &FunctionRequest<'_>) -> FunctionResponse {
    info!(identity = ?request.context.identity, "identity");
    info!(user = ?request.context.user, "user");

    FunctionResponse::message(200, "hello from netlify")
}
