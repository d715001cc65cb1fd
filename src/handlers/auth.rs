use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - exchange admin credentials for a bearer token.
///
/// The token is what the gated listing route accepts. Credentials are
/// compared against the configured admin pair; anything else is a 401.
pub async fn login(Json(body): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let security = &config::config().security;

    if security.admin_email.is_empty()
        || body.email != security.admin_email
        || body.password != security.admin_password
    {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = generate_jwt(Claims::new(body.email)).map_err(|e| {
        tracing::error!("Token generation failed: {}", e);
        ApiError::internal_server_error("Could not issue token")
    })?;

    Ok(Json(json!({ "token": token })))
}
