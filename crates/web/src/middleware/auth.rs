use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use storage::models::{Role, User};

use crate::error::WebError;
use crate::state::AppState;

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub username: String,
    pub role: Role,
    pub exp: i64,
}

/// Issues and verifies the signed bearer tokens carried by organiser and
/// admin requests.
#[derive(Clone)]
pub struct AuthTokens {
    secret: String,
}

impl AuthTokens {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

/// The authenticated actor, injected into request extensions by the auth
/// middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// Gate for endpoints any signed-in organiser (or admin) may call.
pub async fn require_organiser(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user = authenticate(&state, &request)?;
    if !user.role.can_organise() {
        return Err(WebError::Forbidden("This action requires organiser access"));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Gate for admin-only endpoints.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user = authenticate(&state, &request)?;
    if !user.role.is_admin() {
        return Err(WebError::Forbidden("This action requires admin access"));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn authenticate(state: &AppState, request: &Request) -> Result<CurrentUser, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let claims = state.auth.verify(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {e}");
        WebError::Unauthorized
    })?;

    Ok(CurrentUser {
        id: claims.sub,
        username: claims.username,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 7,
            username: "organiser1".to_string(),
            password_hash: String::new(),
            role,
            display_name: "Organiser One".to_string(),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = AuthTokens::new("test-secret");
        let token = tokens.issue(&user(Role::Organiser)).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "organiser1");
        assert_eq!(claims.role, Role::Organiser);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = AuthTokens::new("secret-a").issue(&user(Role::Admin)).unwrap();
        assert!(AuthTokens::new("secret-b").verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(AuthTokens::new("secret").verify("not-a-token").is_err());
    }
}
