use aahaara_core::domain::authentication::{
    entities::{AuthorizeRequestInput, JwtClaim},
    ports::AuthService,
    value_objects::Identity,
};
use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Reads the claims of a compact JWT without checking the signature.
/// The signature is verified by the core before an identity is granted.
fn unverified_claims(token: &str) -> Option<JwtClaim> {
    let mut segments = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| debug!("Failed to decode JWT payload: {:?}", e))
        .ok()?;

    serde_json::from_slice::<JwtClaim>(&decoded)
        .map_err(|e| debug!("Failed to deserialize JWT claims: {:?}", e))
        .ok()
}

async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    Some(bearer.token().to_string()).filter(|token| !token.is_empty())
}

/// Attaches an [`Identity`] to the request when it carries a valid bearer
/// token. Requests without one continue; [`RequiredIdentity`] rejects them.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Some(token) = extract_token_from_bearer(&mut parts).await
        && let Some(claims) = unverified_claims(&token)
    {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { claims, token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => debug!("bearer token rejected: {}", e),
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide a valid Authorization bearer token"
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn encode_segment(value: &serde_json::Value) -> String {
        general_purpose::URL_SAFE_NO_PAD.encode(value.to_string())
    }

    #[test]
    fn reads_claims_from_the_payload_segment() {
        let sub = Uuid::new_v4();
        let token = format!(
            "{}.{}.signature",
            encode_segment(&json!({"alg": "HS256"})),
            encode_segment(&json!({"sub": sub, "preferred_username": "vaidya", "exp": 4102444800i64}))
        );

        let claims = unverified_claims(&token).unwrap();

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.preferred_username, "vaidya");
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(unverified_claims("not-a-jwt").is_none());
        assert!(unverified_claims("a.b.c.d").is_none());
        assert!(unverified_claims("a.!!!.c").is_none());
    }
}
