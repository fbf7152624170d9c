//! HTTP-level authentication checks
//!
//! These tests exercise the bearer-token extractor through the real route
//! table. The Mongo client connects lazily, so requests that are rejected at
//! the authentication boundary never touch a database.

use actix_web::{http::StatusCode, test, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use mongodb::Client;

use pronet_service::config::JwtSettings;
use pronet_service::routes;
use pronet_service::security::{Claims, TokenService};

async fn test_app_parts() -> (web::Data<mongodb::Database>, web::Data<TokenService>) {
    let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .expect("lazy client");
    let database = web::Data::new(client.database("pronet_test"));
    let tokens = web::Data::new(TokenService::new(&JwtSettings {
        secret: "test-secret".to_string(),
    }));
    (database, tokens)
}

macro_rules! app {
    ($db:expr, $tokens:expr) => {
        test::init_service(
            App::new()
                .app_data($db.clone())
                .app_data($tokens.clone())
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn register_with_whitespace_name_is_rejected() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    // Payload validation runs before any store access
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({
            "name": "   ",
            "email": "alice@example.com",
            "password": "hunter22"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn create_post_without_token_is_unauthorized() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(serde_json::json!({ "content": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn non_bearer_scheme_is_unauthorized() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("Authorization", "Basic abc"))
        .set_json(serde_json::json!({ "content": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn garbage_token_is_unauthorized() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .set_json(serde_json::json!({ "content": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn token_signed_with_other_secret_is_unauthorized() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    let foreign = TokenService::new(&JwtSettings {
        secret: "some-other-secret".to_string(),
    });
    let token = foreign
        .issue(bson::oid::ObjectId::new(), "mallory@example.com")
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "content": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn expired_token_is_unauthorized() {
    let (db, tokens) = test_app_parts().await;
    let app = app!(db, tokens);

    let now = Utc::now();
    let claims = Claims {
        sub: bson::oid::ObjectId::new().to_hex(),
        email: "old@example.com".to_string(),
        iat: (now - Duration::days(8)).timestamp(),
        exp: (now - Duration::days(1)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", bson::oid::ObjectId::new().to_hex()))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
