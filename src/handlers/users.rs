/// User profile handlers
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::Deserialize;

use crate::error::Result;
use crate::handlers::parse_object_id;
use crate::middleware::UserId;
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub bio: String,
}

/// GET /users/{id}: profile plus the user's posts, no auth required
pub async fn get_profile(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let target = parse_object_id(&path, "User")?;
    let (user, posts) = UserService::new(db.get_ref().clone()).profile(target).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user": user,
        "posts": posts,
    })))
}

/// PUT /users/{id}: bio update, self only
pub async fn update_profile(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let target = parse_object_id(&path, "User")?;
    let user = UserService::new(db.get_ref().clone())
        .update_bio(target, user_id.0, &payload.bio)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": user })))
}
