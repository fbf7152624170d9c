/// Authorization policy
///
/// Pure ownership checks: a function of the actor's identity and the
/// aggregate's ownership fields, with no I/O. Denial is always an explicit
/// `Forbidden`, never a silent no-op.
use bson::oid::ObjectId;

use crate::error::AppError;
use crate::models::{Comment, Post};

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Only the author may edit a post.
pub fn check_post_update(actor: ObjectId, post: &Post) -> PermissionResult {
    if post.author == actor {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only edit your own posts".to_string(),
        ))
    }
}

/// Only the author may delete a post.
pub fn check_post_deletion(actor: ObjectId, post: &Post) -> PermissionResult {
    if post.author == actor {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only delete your own posts".to_string(),
        ))
    }
}

/// A comment may be deleted by its author, or by the post owner moderating
/// their own post.
pub fn check_comment_deletion(actor: ObjectId, post: &Post, comment: &Comment) -> PermissionResult {
    if comment.author == actor || post.author == actor {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only delete your own comments or comments on your posts".to_string(),
        ))
    }
}

/// Users may edit only their own profile.
pub fn check_profile_update(actor: ObjectId, target: ObjectId) -> PermissionResult {
    if actor == target {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only update your own profile".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn post_by(author: ObjectId) -> Post {
        Post::new(author, "content".to_string(), None)
    }

    #[test]
    fn author_may_edit_and_delete_own_post() {
        let author = ObjectId::new();
        let post = post_by(author);
        assert!(check_post_update(author, &post).is_ok());
        assert!(check_post_deletion(author, &post).is_ok());
    }

    #[test]
    fn stranger_may_not_edit_or_delete_post() {
        let post = post_by(ObjectId::new());
        let stranger = ObjectId::new();
        assert!(matches!(
            check_post_update(stranger, &post),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            check_post_deletion(stranger, &post),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn comment_author_may_delete_own_comment() {
        let commenter = ObjectId::new();
        let mut post = post_by(ObjectId::new());
        post.add_comment(commenter, "hi".to_string());
        let comment = post.comments[0].clone();
        assert!(check_comment_deletion(commenter, &post, &comment).is_ok());
    }

    #[test]
    fn post_owner_may_moderate_any_comment_on_own_post() {
        let owner = ObjectId::new();
        let mut post = post_by(owner);
        post.add_comment(ObjectId::new(), "hi".to_string());
        let comment = post.comments[0].clone();
        assert!(check_comment_deletion(owner, &post, &comment).is_ok());
    }

    #[test]
    fn third_party_may_not_delete_comment() {
        let mut post = post_by(ObjectId::new());
        post.add_comment(ObjectId::new(), "hi".to_string());
        let comment = post.comments[0].clone();
        assert!(matches!(
            check_comment_deletion(ObjectId::new(), &post, &comment),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn profile_updates_are_self_only() {
        let me = ObjectId::new();
        assert!(check_profile_update(me, me).is_ok());
        assert!(matches!(
            check_profile_update(me, ObjectId::new()),
            Err(AppError::Forbidden(_))
        ));
    }
}
