/// MongoDB access layer
///
/// Two collections, `users` and `posts`. Posts embed comments and likes, so
/// every post mutation persists as a whole-document replace and relies on the
/// store's per-document atomicity.
pub mod posts;
pub mod users;

use crate::error::Result;
use mongodb::Database;

/// Round-trip to the server, used at startup and by the health endpoint.
pub async fn ping(db: &Database) -> Result<()> {
    db.run_command(bson::doc! { "ping": 1 }).await?;
    Ok(())
}
