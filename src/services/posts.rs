/// Post aggregate store operations
///
/// Every mutation follows the same cycle: load the full aggregate, apply the
/// change in memory, persist the whole document. Validation and authorization
/// run before any mutation, so a denied request leaves state untouched.
use bson::oid::ObjectId;
use mongodb::Database;
use serde::Serialize;
use std::collections::HashMap;

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::{CommentView, Post, PostView, User};
use crate::validators;

/// Result of a like toggle: the caller's new state and the post-toggle count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeOutcome {
    pub liked: bool,
    pub like_count: usize,
}

pub struct PostService {
    db: Database,
}

impl PostService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a post. Content must be non-empty after trimming; an image
    /// reference is kept only when it is syntactically an http(s) URL.
    pub async fn create(
        &self,
        author: ObjectId,
        content: &str,
        image: Option<&str>,
    ) -> Result<PostView> {
        let content = validators::trimmed_content(content)
            .ok_or_else(|| AppError::ValidationError("Post content is required".to_string()))?;

        let image = image
            .map(str::trim)
            .filter(|url| validators::validate_image_url(url))
            .map(String::from);

        let post = Post::new(author, content.to_string(), image);
        db::posts::insert_post(&self.db, &post).await?;

        self.resolve_one(&post).await
    }

    pub async fn get(&self, post_id: ObjectId) -> Result<PostView> {
        let post = self.load(post_id).await?;
        self.resolve_one(&post).await
    }

    /// Home feed: every post, newest first, authors resolved.
    pub async fn list_all(&self) -> Result<Vec<PostView>> {
        let posts = db::posts::list_posts(&self.db).await?;
        self.resolve_many(&posts).await
    }

    pub async fn list_by_author(&self, author: ObjectId) -> Result<Vec<PostView>> {
        let posts = db::posts::list_posts_by_author(&self.db, author).await?;
        self.resolve_many(&posts).await
    }

    /// Edit post text. Author-only; comments and likes are untouched.
    pub async fn update(
        &self,
        post_id: ObjectId,
        actor: ObjectId,
        content: &str,
    ) -> Result<PostView> {
        let content = validators::trimmed_content(content)
            .ok_or_else(|| AppError::ValidationError("Post content is required".to_string()))?;

        let mut post = self.load(post_id).await?;
        permissions::check_post_update(actor, &post)?;

        post.set_content(content.to_string());
        db::posts::replace_post(&self.db, &post).await?;

        self.resolve_one(&post).await
    }

    /// Delete the aggregate. Author-only; cascades to embedded comments and
    /// likes by construction.
    pub async fn delete(&self, post_id: ObjectId, actor: ObjectId) -> Result<()> {
        let post = self.load(post_id).await?;
        permissions::check_post_deletion(actor, &post)?;

        db::posts::delete_post(&self.db, post_id).await?;
        Ok(())
    }

    /// Flip the caller's like on the post. Any authenticated user may toggle;
    /// concurrent toggles resolve last-write-wins at the document level.
    pub async fn toggle_like(&self, post_id: ObjectId, actor: ObjectId) -> Result<LikeOutcome> {
        let mut post = self.load(post_id).await?;

        let liked = post.toggle_like(actor);
        db::posts::replace_post(&self.db, &post).await?;

        Ok(LikeOutcome {
            liked,
            like_count: post.like_count(),
        })
    }

    /// Append a comment and return it with its author resolved.
    pub async fn add_comment(
        &self,
        post_id: ObjectId,
        author: ObjectId,
        content: &str,
    ) -> Result<CommentView> {
        let content = validators::trimmed_content(content)
            .ok_or_else(|| AppError::ValidationError("Comment content is required".to_string()))?;

        let mut post = self.load(post_id).await?;
        let comment = post.add_comment(author, content.to_string());
        db::posts::replace_post(&self.db, &post).await?;

        let authors = self.authors_for(std::slice::from_ref(&comment.author)).await?;
        Ok(CommentView::resolve(&comment, &authors))
    }

    /// All comments on a post, in insertion order, authors resolved.
    pub async fn list_comments(&self, post_id: ObjectId) -> Result<Vec<CommentView>> {
        let post = self.load(post_id).await?;

        let ids: Vec<ObjectId> = post.comments.iter().map(|c| c.author).collect();
        let authors = self.authors_for(&ids).await?;
        Ok(post
            .comments
            .iter()
            .map(|c| CommentView::resolve(c, &authors))
            .collect())
    }

    /// Remove one comment. Allowed for the comment author or the post owner.
    pub async fn delete_comment(
        &self,
        post_id: ObjectId,
        comment_id: ObjectId,
        actor: ObjectId,
    ) -> Result<()> {
        let mut post = self.load(post_id).await?;

        let comment = post
            .find_comment(comment_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
        permissions::check_comment_deletion(actor, &post, comment)?;

        post.remove_comment(comment_id);
        db::posts::replace_post(&self.db, &post).await?;
        Ok(())
    }

    async fn load(&self, post_id: ObjectId) -> Result<Post> {
        db::posts::find_post(&self.db, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn authors_for(&self, ids: &[ObjectId]) -> Result<HashMap<ObjectId, User>> {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        db::users::find_users_by_ids(&self.db, &unique).await
    }

    async fn resolve_one(&self, post: &Post) -> Result<PostView> {
        let mut ids: Vec<ObjectId> = vec![post.author];
        ids.extend(post.comments.iter().map(|c| c.author));
        let authors = self.authors_for(&ids).await?;
        Ok(PostView::resolve(post, &authors))
    }

    async fn resolve_many(&self, posts: &[Post]) -> Result<Vec<PostView>> {
        // Authors for all posts and their comments resolved in one query.
        let mut ids: Vec<ObjectId> = Vec::new();
        for post in posts {
            ids.push(post.author);
            ids.extend(post.comments.iter().map(|c| c.author));
        }
        let authors = self.authors_for(&ids).await?;
        Ok(posts.iter().map(|p| PostView::resolve(p, &authors)).collect())
    }
}
