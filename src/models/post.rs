use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::user::{User, UserSummary};

/// Comment sub-document, owned exclusively by its parent post.
/// Removal from the parent's array is its destruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub author: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: ObjectId, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            content,
            author,
            created_at: Utc::now(),
        }
    }
}

/// Post aggregate document (`posts` collection)
///
/// The aggregate owns its comment sequence and liker set; both are embedded
/// and persisted with the post as one unit. Mutations happen in memory and
/// the whole document is replaced on save, so per-document atomicity of the
/// store is the only concurrency control. `author` is immutable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub author: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: ObjectId, content: String, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            content,
            author,
            image,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the post text. Comments and likes are untouched.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Flip the caller's membership in the liker set.
    /// Returns `true` if the post is now liked by the user.
    pub fn toggle_like(&mut self, user: ObjectId) -> bool {
        self.updated_at = Utc::now();
        if let Some(pos) = self.likes.iter().position(|id| *id == user) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user);
            true
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Append a comment to the end of the sequence and return it.
    pub fn add_comment(&mut self, author: ObjectId, content: String) -> Comment {
        let comment = Comment::new(author, content);
        self.comments.push(comment.clone());
        self.updated_at = Utc::now();
        comment
    }

    pub fn find_comment(&self, comment_id: ObjectId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Remove exactly the matching comment, preserving the order of the rest.
    pub fn remove_comment(&mut self, comment_id: ObjectId) -> Option<Comment> {
        let pos = self.comments.iter().position(|c| c.id == comment_id)?;
        self.updated_at = Utc::now();
        Some(self.comments.remove(pos))
    }
}

/// Comment with its author resolved to display fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub content: String,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    pub fn resolve(comment: &Comment, authors: &HashMap<ObjectId, User>) -> Self {
        Self {
            id: comment.id.to_hex(),
            content: comment.content.clone(),
            author: summary_for(comment.author, authors),
            created_at: comment.created_at,
        }
    }
}

/// Post with author and comment authors resolved to display fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub content: String,
    pub author: UserSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: Vec<String>,
    pub like_count: usize,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostView {
    pub fn resolve(post: &Post, authors: &HashMap<ObjectId, User>) -> Self {
        Self {
            id: post.id.to_hex(),
            content: post.content.clone(),
            author: summary_for(post.author, authors),
            image: post.image.clone(),
            likes: post.likes.iter().map(|id| id.to_hex()).collect(),
            like_count: post.likes.len(),
            comments: post
                .comments
                .iter()
                .map(|c| CommentView::resolve(c, authors))
                .collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

fn summary_for(id: ObjectId, authors: &HashMap<ObjectId, User>) -> UserSummary {
    authors
        .get(&id)
        .map(UserSummary::from)
        .unwrap_or_else(|| UserSummary::unresolved(id))
}
