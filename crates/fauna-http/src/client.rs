//! HTTP client for the database's query endpoint.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use fauna_core::error::{Error, ExternalCallError, InvalidInputError, ProtocolError};
use fauna_core::{DatabaseUrl, Result, Secret};

use crate::wire::{API_VERSION, API_VERSION_HEADER, ErrorResponse, QueryResponse};

/// HTTP client bound to one endpoint and one secret.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: reqwest::Client,
    endpoint: DatabaseUrl,
    secret: Secret,
}

impl QueryClient {
    /// Create a new client for the given endpoint, authenticating with `secret`.
    pub fn new(endpoint: DatabaseUrl, secret: Secret) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fauna-fns/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            endpoint,
            secret,
        })
    }

    /// Returns the endpoint this client is configured for.
    pub fn endpoint(&self) -> &DatabaseUrl {
        &self.endpoint
    }

    /// Evaluate a query expression and decode the `resource` of the response.
    // Expressions carry passwords; they are never logged.
    #[instrument(skip(self, expr), fields(endpoint = %self.endpoint))]
    pub async fn query<R>(&self, expr: &Value) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint.query_url();
        debug!(%url, "query");

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(expr)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Build the authorization and protocol headers.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.secret.expose()))
            .map_err(|_| InvalidInputError::Other {
                message: "secret contains characters not allowed in a header".to_string(),
            })?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Handle a query response, parsing the resource or the error document.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "query response");

        if status.is_success() {
            let body = response
                .json::<QueryResponse<R>>()
                .await
                .map_err(transport_error)?;
            Ok(body.resource)
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Parse an error response. Only the first error is kept.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        let body = response.json::<ErrorResponse>().await.unwrap_or_default();
        match body.errors.into_iter().next() {
            Some(entry) => ProtocolError::new(status, entry.code, entry.description),
            None => ProtocolError::new(status, None, None),
        }
    }
}

/// Map a `reqwest` failure onto the external-call error kinds.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        ExternalCallError::Timeout
    } else if err.is_connect() {
        ExternalCallError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        ExternalCallError::Decode {
            message: err.to_string(),
        }
    } else {
        ExternalCallError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}
