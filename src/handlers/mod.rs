/// HTTP request handlers
pub mod auth;
pub mod comments;
pub mod posts;
pub mod users;

use bson::oid::ObjectId;

use crate::error::AppError;

/// Parse a path segment as an ObjectId. An id that cannot even be parsed can
/// never resolve, so it reports the same way as an absent document.
pub(crate) fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} not found", what)))
}
