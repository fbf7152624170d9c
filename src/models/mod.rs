/// Data structures for users and the post aggregate
pub mod post;
pub mod user;

pub use post::{Comment, CommentView, Post, PostView};
pub use user::{User, UserProfile, UserSummary};
