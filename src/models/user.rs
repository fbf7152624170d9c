use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account document (`users` collection)
///
/// Emails are stored lowercased so that lookups are case-insensitive; the
/// collection carries a unique index on `email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            name,
            email: email.to_lowercase(),
            password_hash,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_bio(&mut self, bio: String) {
        self.bio = Some(bio);
        self.updated_at = Utc::now();
    }
}

/// Display fields of a user, safe to embed in any response.
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl UserSummary {
    /// Placeholder for an author id that no longer resolves.
    /// Accounts are not deleted in this system, so this is a fallback only.
    pub fn unresolved(id: ObjectId) -> Self {
        Self {
            id: id.to_hex(),
            name: String::new(),
            email: String::new(),
        }
    }
}

/// Full profile view of a user (still excludes the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased_on_creation() {
        let user = User::new(
            "Alice".to_string(),
            "Alice@Example.COM".to_string(),
            "hash".to_string(),
        );
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn summary_never_contains_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "secret-hash".to_string(),
        );
        let json = serde_json::to_string(&UserSummary::from(&user)).unwrap();
        assert!(!json.contains("secret-hash"));
        let json = serde_json::to_string(&UserProfile::from(&user)).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
