//! Hands the client-scoped database key to users with a live identity claim.

use serde_json::json;
use tracing::{error, info};

use crate::claims::Validity;
use crate::registry::FunctionRequest;
use crate::response::FunctionResponse;

pub const UNAUTHORIZED_MESSAGE: &str = "User token invalid or not present";
pub const UNCONFIGURED_MESSAGE: &str = "FAUNADB_CLIENT_SECRET is not configured";

pub fn handle(request: &FunctionRequest<'_>) -> FunctionResponse {
    match Validity::check(request.context.user.as_ref(), request.now) {
        Validity::Valid(user) => {
            info!(?user, "valid user");
            match &request.config.client_secret {
                // The field name is what deployed clients read.
                Some(secret) => {
                    FunctionResponse::json(200, &json!({ "fuanaKey": secret.expose() }))
                }
                None => {
                    error!("client secret is not configured");
                    FunctionResponse::message(500, UNCONFIGURED_MESSAGE)
                }
            }
        }
        Validity::Invalid(reason) => {
            info!(%reason, "invalid user");
            FunctionResponse::message(401, UNAUTHORIZED_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauna_core::Secret;
    use serde_json::{Map, Number, Value};

    use crate::claims::UserClaim;
    use crate::config::FunctionConfig;
    use crate::context::ClientContext;

    const NOW: f64 = 1_700_000_000.0;

    fn config() -> FunctionConfig {
        FunctionConfig::new(Some(Secret::new("fnClientKey")))
    }

    fn request(config: &FunctionConfig, exp: Option<Option<f64>>) -> FunctionRequest<'_> {
        let user = exp.map(|exp| UserClaim {
            exp: exp.and_then(Number::from_f64),
            sub: Some("user-1".to_string()),
            email: Some("player@example.com".to_string()),
            extra: Map::new(),
        });
        FunctionRequest {
            event: Value::Null,
            context: ClientContext {
                identity: None,
                user,
            },
            config,
            now: NOW,
        }
    }

    #[test]
    fn live_claim_receives_key() {
        let config = config();
        let response = handle(&request(&config, Some(Some(NOW + 60.0))));
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap(),
            json!({ "fuanaKey": "fnClientKey" })
        );
    }

    #[test]
    fn fractional_expiry_just_ahead_receives_key() {
        let config = config();
        let response = handle(&request(&config, Some(Some(NOW + 0.5))));
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn invalid_claims_are_refused() {
        let config = config();
        for exp in [None, Some(None), Some(Some(NOW)), Some(Some(NOW - 60.0))] {
            let response = handle(&request(&config, exp));
            assert_eq!(response.status_code, 401, "exp {:?}", exp);
            assert_eq!(
                response.body_json().unwrap(),
                json!({ "message": UNAUTHORIZED_MESSAGE })
            );
        }
    }

    #[test]
    fn missing_secret_is_a_server_error() {
        let config = FunctionConfig::default();
        let response = handle(&request(&config, Some(Some(NOW + 60.0))));
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap(),
            json!({ "message": UNCONFIGURED_MESSAGE })
        );
    }

    #[test]
    fn missing_secret_does_not_change_refusals() {
        let config = FunctionConfig::default();
        let response = handle(&request(&config, None));
        assert_eq!(response.status_code, 401);
    }
}
