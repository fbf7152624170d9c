/// Registration and login flows
use mongodb::Database;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::{password, TokenService};

pub struct AuthService {
    db: Database,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create an account and issue a session token.
    /// Email is stored lowercased; duplicates surface as Conflict.
    pub async fn register(&self, name: &str, email: &str, plain_password: &str) -> Result<(String, User)> {
        let email = email.to_lowercase();

        if db::users::find_user_by_email(&self.db, &email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = password::hash_password(plain_password)?;
        let user = User::new(name.trim().to_string(), email, password_hash);
        db::users::insert_user(&self.db, &user).await?;

        let token = self.tokens.issue(user.id, &user.email)?;
        tracing::info!("User registered: {}", user.email);
        Ok((token, user))
    }

    /// Verify credentials and issue a session token.
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, plain_password: &str) -> Result<(String, User)> {
        let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

        let user = db::users::find_user_by_email(&self.db, email)
            .await?
            .ok_or_else(invalid)?;

        if !password::verify_password(plain_password, &user.password_hash)? {
            return Err(invalid());
        }

        let token = self.tokens.issue(user.id, &user.email)?;
        tracing::info!("User logged in: {}", user.email);
        Ok((token, user))
    }
}
