use axum::http::HeaderMap;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Bearer-token gate in front of every catalog endpoint; handlers only run
/// in an already-authenticated context. Claims are stored in the request
/// extensions for handlers that want the caller identity.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())
        .ok_or_else(|| ApiError::Unauthorized("missing token".to_string()))?
        .to_string();

    let key = DecodingKey::from_secret(state.args.auth.jwt_secret.as_bytes());
    let data = decode::<JwtClaims>(&token, &key, &Validation::default()).map_err(|e| {
        tracing::warn!("token rejected: {}", e);
        ApiError::Unauthorized("invalid token".to_string())
    })?;

    req.extensions_mut().insert(data.claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{EncodingKey, Header, encode};

    #[test]
    fn bearer_extraction_requires_the_scheme_and_a_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_bearer(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn tokens_round_trip_against_the_shared_secret() {
        let secret = b"test-secret";
        let claims = JwtClaims {
            sub: "svc-ordering".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
            iat: chrono::Utc::now().timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        let decoded = decode::<JwtClaims>(
            &token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "svc-ordering");

        let wrong_key = decode::<JwtClaims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(wrong_key.is_err());
    }
}
