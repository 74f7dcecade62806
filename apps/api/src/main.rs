use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use items_api::api::middleware::BearerAuth;
use items_api::api::router;
use items_api::config::AppConfig;
use items_api::domain::repositories::{SharedItemRepository, UpdateMode};
use items_api::infrastructure::dynamodb;
use items_api::infrastructure::repositories::DynamoItemRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before reading RUST_LOG
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(table = %config.table_name, "Connecting to DynamoDB...");
    let client = dynamodb::build_client(config.dynamodb_endpoint.as_deref()).await;
    let repo: SharedItemRepository = Arc::new(
        DynamoItemRepository::new(client, config.table_name.clone())
            .with_update_mode(config.update_mode),
    );

    if config.update_mode == UpdateMode::Upsert {
        tracing::info!("PUT /v1/items creates missing items; set STRICT_UPDATE=true to reject them");
    }

    let auth = config.jwt_secret.clone().map(BearerAuth::new);
    if auth.is_none() {
        tracing::warn!("JWT_SECRET not set, item routes are unauthenticated");
    }

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router::app(repo, auth)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
