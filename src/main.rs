use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use movies_api::app;
use movies_api::config::settings::AppConfig;
use movies_api::infrastructure::db::pool::connect_to_db;
use movies_api::modules::movie::repository::PgMovieStore;
use movies_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new().expect("DATABASE_URL must be set");
    let pool = connect_to_db(&config.database_url)
        .await
        .expect("failed to connect to database");

    let store = Arc::new(PgMovieStore::new(pool));
    let state = AppState::new(config.clone(), store);

    let app = app::create_app(state).await;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
