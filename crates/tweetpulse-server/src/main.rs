mod api;
mod middleware;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;
use tweetpulse_core::TweetStore;
use tweetpulse_sentiment::{LexiconScorer, SentimentAggregator};

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tweetpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client_config = tweetpulse_db::ClientConfig::from_app_config(&config);
    let mongo = tweetpulse_db::connect_store(&config.mongodb_uri, &client_config).await?;

    // Start anyway; requests fail with a generic 500 until the database comes back.
    match tweetpulse_db::health_check(&mongo).await {
        Ok(()) => tracing::info!(database = %client_config.database_name, "connected to mongodb"),
        Err(e) => tracing::warn!(error = %e, "mongodb not reachable at startup"),
    }

    let store: Arc<dyn TweetStore> = Arc::new(mongo);
    let aggregator = SentimentAggregator::new(Arc::clone(&store), Arc::new(LexiconScorer::new()));
    let rate_limit = RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    );
    let app = build_app(AppState { aggregator, store }, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "tweetpulse server listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
