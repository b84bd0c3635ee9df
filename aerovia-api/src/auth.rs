use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use aerovia_shared::{Authority, User};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: String,
    username: String,
    password: String,
    #[serde(default)]
    admin: bool,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let authority = if req.admin {
        Authority::Administrator
    } else {
        Authority::Passenger
    };

    let user = state
        .users
        .register(&req.email, &req.username, &req.password, authority)
        .await?;

    let token = issue_token(&user, &state)?;
    Ok(Json(AuthResponse { token }))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state.users.authenticate(&req.email, &req.password).await?;

    let token = issue_token(&user, &state)?;
    Ok(Json(AuthResponse { token }))
}

fn issue_token(user: &User, state: &AppState) -> Result<String, AppError> {
    let claims = Claims {
        sub: user.email.clone(),
        role: user.authority.as_role().to_owned(),
        exp: (Utc::now().timestamp() + state.auth.expiration as i64) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::Anyhow(e.into()))
}

/// Extract and validate the bearer token on a protected route.
pub fn require_claims(headers: &HeaderMap, state: &AppState) -> Result<Claims, AppError> {
    let header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Missing Authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthenticationError("Malformed Authorization header".into()))?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AppError::AuthenticationError(e.to_string()))?;

    Ok(data.claims)
}

/// Admin-only routes additionally check the role claim.
pub fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.role != "ADMINISTRATOR" {
        return Err(AppError::AuthorizationError(
            "Administrator authority required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusinessRules;
    use crate::state::AuthConfig;
    use uuid::Uuid;

    fn state() -> AppState {
        AppState::new(
            AuthConfig {
                secret: "test-secret".into(),
                expiration: 3600,
            },
            BusinessRules::default(),
        )
    }

    #[test]
    fn test_token_round_trip() {
        let state = state();
        let user = User {
            id: Uuid::new_v4(),
            email: "ana@example.com".into(),
            username: "ana".into(),
            password: "hunter22".to_string().into(),
            authority: Authority::Administrator,
        };

        let token = issue_token(&user, &state).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", format!("Bearer {}", token).parse().unwrap());

        let claims = require_claims(&headers, &state).unwrap();
        assert_eq!(claims.sub, "ana@example.com");
        assert_eq!(claims.role, "ADMINISTRATOR");
        assert!(require_admin(&claims).is_ok());
    }

    #[test]
    fn test_missing_and_malformed_headers() {
        let state = state();

        let headers = HeaderMap::new();
        assert!(require_claims(&headers, &state).is_err());

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Token abc".parse().unwrap());
        assert!(require_claims(&headers, &state).is_err());
    }

    #[test]
    fn test_passenger_is_not_admin() {
        let claims = Claims {
            sub: "ana@example.com".into(),
            role: "PASSENGER".into(),
            exp: 0,
        };
        assert!(require_admin(&claims).is_err());
    }
}
