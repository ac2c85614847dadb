use std::sync::Arc;

use anyhow::Context;
use movies_api::{
    config::Config,
    db::{self, MovieStore, PgMovieStore},
    routes::{create_router, AppState},
    services::SimilarityIndex,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movies_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        db::run_migrations(&pool)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("Database migrations applied");
    }

    let store: Arc<dyn MovieStore> = Arc::new(PgMovieStore::new(pool));

    // Recommendations cannot be served without the artifacts, so refuse to start
    let similarity = SimilarityIndex::load(
        &config.vectorizer_path(),
        &config.matrix_path(),
        store.as_ref(),
    )
    .await
    .context("Failed to load similarity artifacts")?;
    if similarity.is_empty() {
        tracing::warn!("Similarity index has no rows, every recommendation request will find none");
    }

    let state = AppState::new(store, Arc::new(similarity), config.recommendation_limit);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
