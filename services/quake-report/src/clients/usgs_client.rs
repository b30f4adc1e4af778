use reqwest::{Client, StatusCode, Url};
use tracing::{error, info};

use crate::config::Config;
use crate::errors::FeedError;

pub struct UsgsClient {
    client: Client,
}

impl UsgsClient {
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the feed body, or an empty string on any failure.
    ///
    /// A malformed url, a connection or read error, and a non-200 status are
    /// all logged here and never reach the caller.
    pub async fn fetch_body(&self, url: &str) -> String {
        match self.try_fetch_body(url).await {
            Ok(body) => body,
            Err(e) => {
                error!("Problem fetching earthquake feed: {}", e);
                String::new()
            }
        }
    }

    /// Fetch the feed body, reporting why it failed.
    pub async fn try_fetch_body(&self, url: &str) -> Result<String, FeedError> {
        let url = parse_request_url(url)?;
        info!("Fetching earthquake feed from: {}", url);

        // The response owns the connection and is dropped on every return.
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

fn parse_request_url(raw: &str) -> Result<Url, FeedError> {
    let invalid = |reason: String| FeedError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{}`", other))),
    }
}
