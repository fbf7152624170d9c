//! End-to-end behavior of the post aggregate and the authorization policy,
//! exercised without a live store. Persistence is a whole-document replace,
//! so everything observable about a mutation is visible on the in-memory
//! aggregate itself.

use bson::oid::ObjectId;

use pronet_service::error::AppError;
use pronet_service::middleware::permissions;
use pronet_service::models::{Post, User};
use pronet_service::validators;

#[test]
fn like_unlike_delete_scenario() {
    let user_a = ObjectId::new();
    let user_b = ObjectId::new();

    // A creates post P with content "Hi"
    let mut post = Post::new(user_a, "Hi".to_string(), None);

    // B likes P
    assert!(post.toggle_like(user_b));
    assert_eq!(post.like_count(), 1);

    // B unlikes P
    assert!(!post.toggle_like(user_b));
    assert_eq!(post.like_count(), 0);

    // A may delete P; B may not
    assert!(matches!(
        permissions::check_post_deletion(user_b, &post),
        Err(AppError::Forbidden(_))
    ));
    assert!(permissions::check_post_deletion(user_a, &post).is_ok());
}

#[test]
fn comment_lifecycle_and_moderation() {
    let owner = ObjectId::new();
    let commenter = ObjectId::new();
    let bystander = ObjectId::new();

    let mut post = Post::new(owner, "Hello".to_string(), None);
    let first = post.add_comment(commenter, "nice post".to_string()).id;
    let second = post.add_comment(bystander, "agreed".to_string()).id;

    // New comments land at the end, exactly once
    assert_eq!(post.comments.len(), 2);
    assert_eq!(post.comments[1].id, second);
    assert_eq!(
        post.comments.iter().filter(|c| c.id == second).count(),
        1
    );

    // A bystander cannot delete someone else's comment
    let target = post.find_comment(first).unwrap().clone();
    assert!(matches!(
        permissions::check_comment_deletion(bystander, &post, &target),
        Err(AppError::Forbidden(_))
    ));

    // The post owner can moderate regardless of comment author
    assert!(permissions::check_comment_deletion(owner, &post, &target).is_ok());

    // Removal takes out exactly the one comment and keeps order
    post.remove_comment(first);
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].id, second);
    assert!(post.find_comment(first).is_none());
}

#[test]
fn content_validation_matches_store_rules() {
    // Whitespace-only content can never create or update a post
    assert!(validators::trimmed_content("   ").is_none());
    assert!(validators::trimmed_content("Hello").is_some());

    // A non-URL image reference is dropped, a URL one kept
    assert!(!validators::validate_image_url("cat.png"));
    assert!(validators::validate_image_url("https://img.example.com/cat.png"));
}

#[test]
fn author_survives_edits_and_email_is_case_insensitive() {
    let author = ObjectId::new();
    let mut post = Post::new(author, "v1".to_string(), None);
    post.set_content("v2".to_string());
    post.set_content("v3".to_string());
    assert_eq!(post.author, author);

    let user = User::new(
        "Casey".to_string(),
        "Casey@Example.Com".to_string(),
        "hash".to_string(),
    );
    assert_eq!(user.email, "casey@example.com");
}
