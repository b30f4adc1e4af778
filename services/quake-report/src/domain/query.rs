use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const USGS_QUERY_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Parameters of a USGS event query. The response format is always GeoJSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub base_url: String,
    pub order_by: String,
    pub min_magnitude: f64,
    pub limit: u32,
}

impl FeedQuery {
    pub fn to_url(&self) -> String {
        let params = [
            ("format", "geojson".to_string()),
            ("orderby", self.order_by.clone()),
            ("minmag", self.min_magnitude.to_string()),
            ("limit", self.limit.to_string()),
        ];

        match Url::parse_with_params(&self.base_url, &params) {
            Ok(url) => url.to_string(),
            // Left for the fetcher to reject as malformed.
            Err(_) => {
                let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                format!("{}?{}", self.base_url, query.join("&"))
            }
        }
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            base_url: USGS_QUERY_ENDPOINT.to_string(),
            order_by: "time".to_string(),
            min_magnitude: 6.0,
            limit: 10,
        }
    }
}
