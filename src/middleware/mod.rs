/// HTTP middleware utilities
///
/// Bearer-token authentication is implemented as a `FromRequest` extractor
/// rather than a scope-level wrapper because public and protected verbs share
/// paths here (GET /posts is open, POST /posts is not). Handlers that require
/// an authenticated caller take `UserId` as an argument; extraction parses
/// the `Authorization: Bearer <token>` header and verifies the token.
pub mod permissions;

pub use permissions::*;

use actix_web::{web, FromRequest, HttpRequest};
use bson::oid::ObjectId;
use std::future::{ready, Ready};

use crate::error::AppError;
use crate::security::TokenService;

/// Authenticated caller identity, extracted from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub ObjectId);

impl FromRequest for UserId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(extract_user_id(req))
    }
}

fn extract_user_id(req: &HttpRequest) -> Result<UserId, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::Internal("TokenService not registered".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".to_string()))?;

    let claims = token_service.verify(token)?;

    let user_id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user ID".to_string()))?;

    Ok(UserId(user_id))
}
