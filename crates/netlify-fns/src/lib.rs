//! Serverless function handlers for the hosting platform.
//!
//! Each handler is a plain function from [`FunctionRequest`] to
//! [`FunctionResponse`], registered under the entry-point name the platform
//! invokes it by. The `netlify-fn` binary adapts a registered handler to
//! the Lambda runtime through [`lambda::invoke`].

pub mod claims;
pub mod config;
pub mod context;
pub mod handlers;
pub mod lambda;
pub mod registry;
pub mod response;

pub use claims::{UserClaim, Validity};
pub use config::FunctionConfig;
pub use context::ClientContext;
pub use registry::{ENTRY_POINTS, EntryPoint, FunctionRequest, Handler, lookup};
pub use response::FunctionResponse;
