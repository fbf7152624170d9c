use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::User;

const COLLECTION: &str = "users";

/// Server code for a unique-index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key_code(code: i32) -> bool {
    code == DUPLICATE_KEY_CODE
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => is_duplicate_key_code(we.code),
        _ => false,
    }
}

fn collection(db: &Database) -> Collection<User> {
    db.collection(COLLECTION)
}

/// Ensure the unique email index exists. Called once at startup.
pub async fn ensure_indexes(db: &Database) -> Result<()> {
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    collection(db).create_index(index).await?;
    Ok(())
}

/// Insert a new account. The pre-check in the auth flow catches most
/// duplicate emails; the unique index is the backstop under concurrent
/// registration, and its violation must still surface as a conflict,
/// not an internal error.
pub async fn insert_user(db: &Database, user: &User) -> Result<()> {
    collection(db).insert_one(user).await.map_err(|e| {
        if is_duplicate_key(&e) {
            AppError::Conflict("Email already registered".to_string())
        } else {
            AppError::from(e)
        }
    })?;
    Ok(())
}

pub async fn find_user(db: &Database, id: ObjectId) -> Result<Option<User>> {
    Ok(collection(db).find_one(doc! { "_id": id }).await?)
}

/// Case-insensitive lookup: emails are stored lowercased.
pub async fn find_user_by_email(db: &Database, email: &str) -> Result<Option<User>> {
    Ok(collection(db)
        .find_one(doc! { "email": email.to_lowercase() })
        .await?)
}

/// Batch-resolve users by id, one query per request regardless of how many
/// authors a post list references.
pub async fn find_users_by_ids(
    db: &Database,
    ids: &[ObjectId],
) -> Result<HashMap<ObjectId, User>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let cursor = collection(db)
        .find(doc! { "_id": { "$in": ids.to_vec() } })
        .await?;
    let users: Vec<User> = cursor.try_collect().await?;
    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

/// Persist a mutated user record by whole-document replace.
pub async fn replace_user(db: &Database, user: &User) -> Result<bool> {
    let result = collection(db)
        .replace_one(doc! { "_id": user.id }, user)
        .await?;
    Ok(result.matched_count > 0)
}
