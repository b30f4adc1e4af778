use std::sync::Arc;

use quake_report::{
    routes::create_router, services::start_initial_load, AppState, Config, EarthquakeLoader,
    UsgsClient,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        "Connect timeout {}s, read timeout {}s, parse policy {:?}",
        config.connect_timeout_secs,
        config.read_timeout_secs,
        config.parse_policy
    );

    let client = UsgsClient::new(&config)?;
    let loader = EarthquakeLoader::new(client, config.feed_url.clone(), config.parse_policy);

    let state = AppState {
        loader: Arc::new(loader),
    };

    start_initial_load(state.clone());

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
