use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::error::Result;
use crate::models::Post;

const COLLECTION: &str = "posts";

fn collection(db: &Database) -> Collection<Post> {
    db.collection(COLLECTION)
}

pub async fn insert_post(db: &Database, post: &Post) -> Result<()> {
    collection(db).insert_one(post).await?;
    Ok(())
}

pub async fn find_post(db: &Database, id: ObjectId) -> Result<Option<Post>> {
    Ok(collection(db).find_one(doc! { "_id": id }).await?)
}

/// All posts, newest first. Full scan; there is no pagination in this system.
pub async fn list_posts(db: &Database) -> Result<Vec<Post>> {
    let cursor = collection(db)
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .await?;
    Ok(cursor.try_collect().await?)
}

/// One author's posts, newest first.
pub async fn list_posts_by_author(db: &Database, author: ObjectId) -> Result<Vec<Post>> {
    let cursor = collection(db)
        .find(doc! { "author": author })
        .sort(doc! { "created_at": -1 })
        .await?;
    Ok(cursor.try_collect().await?)
}

/// Persist a mutated aggregate by replacing the whole document.
/// Embedded comments and likes travel with it as one unit.
pub async fn replace_post(db: &Database, post: &Post) -> Result<bool> {
    let result = collection(db)
        .replace_one(doc! { "_id": post.id }, post)
        .await?;
    Ok(result.matched_count > 0)
}

/// Delete the aggregate. Embedded comments and likes are destroyed with it;
/// no orphaned sub-records are possible by construction.
pub async fn delete_post(db: &Database, id: ObjectId) -> Result<bool> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count > 0)
}
