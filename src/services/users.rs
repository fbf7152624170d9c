/// Profile reads and bio updates
use bson::oid::ObjectId;
use mongodb::Database;

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::{PostView, UserProfile};
use crate::services::PostService;

pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Profile view: the user's display record plus their posts newest-first.
    pub async fn profile(&self, user_id: ObjectId) -> Result<(UserProfile, Vec<PostView>)> {
        let user = self.load(user_id).await?;
        let posts = PostService::new(self.db.clone())
            .list_by_author(user_id)
            .await?;
        Ok((UserProfile::from(&user), posts))
    }

    /// Update the bio. Self-only; the rest of the record is immutable here.
    pub async fn update_bio(
        &self,
        target: ObjectId,
        actor: ObjectId,
        bio: &str,
    ) -> Result<UserProfile> {
        permissions::check_profile_update(actor, target)?;

        let mut user = self.load(target).await?;
        user.set_bio(bio.trim().to_string());
        db::users::replace_user(&self.db, &user).await?;

        Ok(UserProfile::from(&user))
    }

    async fn load(&self, user_id: ObjectId) -> Result<crate::models::User> {
        db::users::find_user(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
