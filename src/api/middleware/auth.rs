//! Bearer-token authentication.
//!
//! Two levels are in play: the file endpoints require any valid signed
//! bearer token, while the comment-moderation endpoints additionally pin the
//! token to an application and a task (`approve` or `deny`) so a token
//! minted for one action cannot drive the other.

use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::env;

use crate::api::errors::ApiError;

/// Application name expected in moderation tokens.
pub const MODERATION_APP: &str = "comments_moderation";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct ModerationClaims {
    app: String,
    task: String,
    exp: usize,
}

/// Middleware for the file endpoints: any valid signed bearer token.
pub async fn auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Development escape hatch
    if env::var("DISABLE_AUTH").unwrap_or_default() == "true" {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    decode::<Claims>(token, &decoding_key()?, &validation()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        StatusCode::UNAUTHORIZED
    })?;

    Ok(next.run(request).await)
}

/// Verify a moderation token and check its `app`/`task` claims against the
/// action being performed.
pub fn verify_moderation_token(headers: &HeaderMap, task: &str) -> Result<(), ApiError> {
    if env::var("DISABLE_AUTH").unwrap_or_default() == "true" {
        return Ok(());
    }

    let token = bearer_token(headers)
        .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

    let key = decoding_key().map_err(|_| ApiError::internal_error("JWT secret not configured"))?;
    let data = decode::<ModerationClaims>(token, &key, &validation())
        .map_err(|e| ApiError::unauthorized(format!("Invalid JSON Web Token: {e}")))?;

    if data.claims.app != MODERATION_APP {
        return Err(ApiError::unauthorized(
            "Invalid app in JSON Web Token payload",
        ));
    }
    if data.claims.task != task {
        return Err(ApiError::unauthorized(
            "Invalid task in JSON Web Token payload",
        ));
    }

    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn decoding_key() -> Result<DecodingKey, StatusCode> {
    let secret = env::var("JWT_SECRET").map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(DecodingKey::from_secret(secret.as_bytes()))
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation
}
