/// PROnet Service Library
///
/// A minimal professional social-networking backend: registration and login,
/// text/image posts, likes, comments, and profile bios over MongoDB.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: User and Post aggregate documents plus response views
/// - `services`: Business logic layer
/// - `db`: MongoDB access layer and repositories
/// - `security`: Password hashing and token issuance/verification
/// - `middleware`: Bearer-token extraction and authorization policy
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod validators;

pub use config::Settings;
pub use error::{AppError, Result};
