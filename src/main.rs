use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use mongodb::{Client, Database};
use pronet_service::security::TokenService;
use pronet_service::{db, routes, Settings};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(database: web::Data<Database>) -> HttpResponse {
    match db::ping(database.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "pronet-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": "pronet-service"
            }))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing JWT secret or database URI is fatal here,
    // not at request time.
    let settings = match Settings::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting pronet-service v{}", env!("CARGO_PKG_VERSION"));

    let client = match Client::with_uri_str(&settings.database.uri).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("MongoDB client creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create MongoDB client: {}", e);
            std::process::exit(1);
        }
    };
    let database = client.database(&settings.database.database);

    if let Err(e) = db::ping(&database).await {
        tracing::error!("MongoDB ping failed: {:#}", e);
        eprintln!("ERROR: Failed to reach MongoDB: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Connected to MongoDB database '{}'", settings.database.database);

    if let Err(e) = db::users::ensure_indexes(&database).await {
        tracing::error!("Index creation failed: {:#}", e);
        eprintln!("ERROR: Failed to ensure indexes: {}", e);
        std::process::exit(1);
    }

    let token_service = web::Data::new(TokenService::new(&settings.jwt));
    let database_data = web::Data::new(database);

    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = settings.cors.allowed_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(database_data.clone())
            .app_data(token_service.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/health", web::get().to(health_summary))
            .configure(routes::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
