/// Authentication handlers
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::UserSummary;
use crate::security::TokenService;
use crate::services::AuthService;
use crate::validators::{validate_display_name, validate_email_shape};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = validate_display_name, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = validate_email_shape, message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token plus the authenticated user's display fields
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// POST /auth/register
pub async fn register(
    db: web::Data<Database>,
    tokens: web::Data<TokenService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let service = AuthService::new(db.get_ref().clone(), tokens.get_ref().clone());
    let (token, user) = service
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}

/// POST /auth/login
pub async fn login(
    db: web::Data<Database>,
    tokens: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let service = AuthService::new(db.get_ref().clone(), tokens.get_ref().clone());
    let (token, user) = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}
