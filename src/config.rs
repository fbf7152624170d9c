//! Configuration management for PROnet Service
//!
//! Settings are loaded from environment variables, with a `.env` file picked
//! up in local development. The JWT signing secret is mandatory: its absence
//! is a startup error, never a request-time one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub cors: CorsSettings,
}

impl Settings {
    /// Load settings from environment variables (and `.env` in development)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Settings {
            server: ServerSettings::from_env()?,
            database: DatabaseSettings::from_env()?,
            jwt: JwtSettings::from_env()?,
            cors: CorsSettings::from_env(),
        })
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,
        })
    }
}

/// MongoDB connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub uri: String,
    pub database: String,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            uri: env::var("MONGODB_URI").context("MONGODB_URI must be set")?,
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "pronet".to_string()),
        })
    }
}

/// Token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSettings {
    pub secret: String,
}

impl JwtSettings {
    fn from_env() -> Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }
        Ok(Self { secret })
    }
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Comma-separated list of allowed origins, `*` for any
    pub allowed_origins: String,
}

impl CorsSettings {
    fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }
}
