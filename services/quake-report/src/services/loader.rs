use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::clients::UsgsClient;
use crate::domain::Earthquake;
use crate::parser::ParsePolicy;
use crate::services::QuakeService;

/// The result of one load. Replaced wholesale by the next one.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub loaded_at: DateTime<Utc>,
    pub complete: bool,
    pub earthquakes: Vec<Earthquake>,
}

/// Runs the fetch/parse pipeline on demand, one load at a time.
pub struct EarthquakeLoader {
    client: UsgsClient,
    url: Option<String>,
    policy: ParsePolicy,
    in_flight: Mutex<()>,
    latest: RwLock<Option<Arc<Snapshot>>>,
}

impl EarthquakeLoader {
    pub fn new(client: UsgsClient, url: Option<String>, policy: ParsePolicy) -> Self {
        Self {
            client,
            url,
            policy,
            in_flight: Mutex::new(()),
            latest: RwLock::new(None),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Load the feed. `None` when no url is configured.
    ///
    /// Concurrent callers queue behind the load in flight and then run
    /// their own.
    pub async fn load(&self) -> Option<Arc<Snapshot>> {
        let Some(url) = self.url.as_deref() else {
            warn!("Earthquake load requested but no feed url is configured");
            return None;
        };

        let _guard = self.in_flight.lock().await;

        let report = QuakeService::fetch_report(&self.client, url, self.policy).await;
        let snapshot = Arc::new(Snapshot {
            loaded_at: Utc::now(),
            complete: report.is_complete(),
            earthquakes: report.earthquakes,
        });

        *self.latest.write().await = Some(snapshot.clone());
        info!("Earthquake snapshot replaced with {} records", snapshot.earthquakes.len());

        Some(snapshot)
    }

    /// The snapshot from the most recent load, if any.
    pub async fn latest(&self) -> Option<Arc<Snapshot>> {
        self.latest.read().await.clone()
    }
}
