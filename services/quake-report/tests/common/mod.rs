#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use quake_report::{Config, UsgsClient};
use serde_json::json;
use tokio::net::TcpListener;

pub const ONE_FEATURE: &str = r#"{"features":[{"properties":{"mag":6.5,"place":"10km N of Testville","time":1650000000000,"url":"http://x/1"}}]}"#;
pub const NO_FEATURES: &str = r#"{"features":[]}"#;

/// Five features, the one at index 3 has no `mag`.
pub fn truncated_batch() -> String {
    let features: Vec<_> = (0..5)
        .map(|i| {
            let mut properties = json!({
                "mag": 5.0 + i as f64,
                "place": format!("place {}", i),
                "time": 1_650_000_000_000_i64 + i,
                "url": format!("http://x/{}", i),
            });
            if i == 3 {
                properties.as_object_mut().unwrap().remove("mag");
            }
            json!({ "type": "Feature", "properties": properties })
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// Serve canned feed responses on an ephemeral local port. Returns the base url.
pub async fn spawn_feed_server() -> String {
    let app = Router::new()
        .route("/feed/one", get(|| async { ONE_FEATURE }))
        .route("/feed/empty", get(|| async { NO_FEATURES }))
        .route("/feed/truncated", get(|| async { truncated_batch() }))
        .route("/feed/not-json", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/feed/unavailable",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        )
        .route(
            "/feed/error-with-body",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, ONE_FEATURE) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A url on a port nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/feed", addr)
}

pub fn test_client() -> UsgsClient {
    UsgsClient::new(&Config::default()).unwrap()
}

/// Request counters for a slow feed route.
#[derive(Default)]
pub struct FlightCounter {
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub served: AtomicUsize,
}

async fn slow_feed(State(counter): State<Arc<FlightCounter>>) -> &'static str {
    let now = counter.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    counter.max_in_flight.fetch_max(now, Ordering::SeqCst);

    tokio::time::sleep(Duration::from_millis(200)).await;

    counter.in_flight.fetch_sub(1, Ordering::SeqCst);
    counter.served.fetch_add(1, Ordering::SeqCst);
    ONE_FEATURE
}

/// Serve `/feed/slow`, which answers after 200 ms and tracks how many
/// requests overlap. Returns the base url and the counters.
pub async fn spawn_slow_feed_server() -> (String, Arc<FlightCounter>) {
    let counter = Arc::new(FlightCounter::default());
    let app = Router::new()
        .route("/feed/slow", get(slow_feed))
        .with_state(counter.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), counter)
}
