/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::Deserialize;

use crate::error::Result;
use crate::handlers::parse_object_id;
use crate::middleware::UserId;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: String,
}

/// GET /posts: home feed, no auth required
pub async fn list_posts(db: web::Data<Database>) -> Result<HttpResponse> {
    let posts = PostService::new(db.get_ref().clone()).list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    db: web::Data<Database>,
    user_id: UserId,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = PostService::new(db.get_ref().clone())
        .create(user_id.0, &payload.content, payload.image.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts/{id}
pub async fn get_post(db: web::Data<Database>, path: web::Path<String>) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    let post = PostService::new(db.get_ref().clone()).get(post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    let post = PostService::new(db.get_ref().clone())
        .update(post_id, user_id.0, &payload.content)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    PostService::new(db.get_ref().clone())
        .delete(post_id, user_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Post deleted successfully"
    })))
}

/// POST /posts/{id}/like: flips the caller's like and returns the new state
pub async fn toggle_like(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    let outcome = PostService::new(db.get_ref().clone())
        .toggle_like(post_id, user_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}
