/// Business logic layer
pub mod auth;
pub mod posts;
pub mod users;

pub use auth::AuthService;
pub use posts::{LikeOutcome, PostService};
pub use users::UserService;
