use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Earthquake;
use crate::errors::ApiError;
use crate::services::scheduler::AppState;
use crate::services::Snapshot;

#[derive(Debug, Serialize)]
pub struct EarthquakeListResponse {
    pub ok: bool,
    pub count: usize,
    pub complete: bool,
    pub loaded_at: DateTime<Utc>,
    pub earthquakes: Vec<Earthquake>,
}

impl From<Arc<Snapshot>> for EarthquakeListResponse {
    fn from(snapshot: Arc<Snapshot>) -> Self {
        Self {
            ok: true,
            count: snapshot.earthquakes.len(),
            complete: snapshot.complete,
            loaded_at: snapshot.loaded_at,
            earthquakes: snapshot.earthquakes.clone(),
        }
    }
}

/// Run a fresh load and return its records
pub async fn load_earthquakes(
    State(state): State<AppState>,
) -> Result<Json<EarthquakeListResponse>, ApiError> {
    let snapshot = state
        .loader
        .load()
        .await
        .ok_or_else(|| ApiError::not_configured("No earthquake feed url configured"))?;

    Ok(Json(snapshot.into()))
}

/// Return the records from the most recent load
pub async fn latest_earthquakes(
    State(state): State<AppState>,
) -> Result<Json<EarthquakeListResponse>, ApiError> {
    let snapshot = state
        .loader
        .latest()
        .await
        .ok_or_else(|| ApiError::not_found("No earthquakes have been loaded yet"))?;

    Ok(Json(snapshot.into()))
}
