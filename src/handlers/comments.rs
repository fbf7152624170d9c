/// Comment handlers - endpoints over a post's embedded comment sequence
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::Deserialize;

use crate::error::Result;
use crate::handlers::parse_object_id;
use crate::middleware::UserId;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// GET /posts/{id}/comments: no auth required
pub async fn list_comments(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    let comments = PostService::new(db.get_ref().clone())
        .list_comments(post_id)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "comments": comments })))
}

/// POST /posts/{id}/comments
pub async fn create_comment(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_object_id(&path, "Post")?;
    let comment = PostService::new(db.get_ref().clone())
        .add_comment(post_id, user_id.0, &payload.content)
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /posts/{id}/comments/{comment_id}
pub async fn delete_comment(
    db: web::Data<Database>,
    user_id: UserId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_object_id(&post_id, "Post")?;
    let comment_id = parse_object_id(&comment_id, "Comment")?;

    PostService::new(db.get_ref().clone())
        .delete_comment(post_id, comment_id, user_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Comment deleted successfully"
    })))
}
