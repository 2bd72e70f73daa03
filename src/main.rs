use std::sync::Arc;

use anyhow::Context;

use course_recommender::{
    catalog,
    config::Config,
    recommender::CatalogIndex,
    routes::create_router,
    state::{AppState, ResultLimits},
    store::RedisStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_recommender=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // The catalog is fatal: without it there is nothing to recommend.
    let records = catalog::load_catalog(&config.catalog_path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path))?;

    // Fit once; every request reuses this frozen vector space.
    let index = Arc::new(CatalogIndex::build(records));

    let store = Arc::new(RedisStore::connect(&config.redis_url)?);

    let state = AppState {
        index,
        store,
        limits: ResultLimits {
            default_count: config.default_count,
            max_count: config.max_count,
        },
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
