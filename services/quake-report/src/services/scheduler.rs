use std::sync::Arc;

use tracing::{info, warn};

use crate::services::EarthquakeLoader;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<EarthquakeLoader>,
}

/// Kick off the first load in the background so `/earthquakes/latest` has
/// something to serve without waiting for a request.
pub fn start_initial_load(state: AppState) {
    tokio::spawn(async move {
        match state.loader.url() {
            Some(url) => info!("Starting initial earthquake load from {}", url),
            None => warn!("No earthquake feed url configured; loads will be refused"),
        }

        match state.loader.load().await {
            Some(snapshot) => info!(
                "Initial earthquake load finished with {} records",
                snapshot.earthquakes.len()
            ),
            None => warn!("Initial earthquake load skipped"),
        }
    });
}
