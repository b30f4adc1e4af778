use std::env;
use std::time::Duration;

use tracing::warn;

use crate::domain::FeedQuery;
use crate::parser::ParsePolicy;

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` when `FEED_URL` is set but blank.
    pub feed_url: Option<String>,
    pub user_agent: String,

    // Outbound HTTP timeouts in seconds
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,

    pub parse_policy: ParsePolicy,

    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self::from_source(|key| env::var(key).ok()))
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the
    /// process environment.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FeedQuery::default();
        let query = FeedQuery {
            base_url: lookup("FEED_BASE_URL").unwrap_or(defaults.base_url),
            order_by: lookup("FEED_ORDER_BY").unwrap_or(defaults.order_by),
            min_magnitude: parse_or(&lookup, "FEED_MIN_MAGNITUDE", defaults.min_magnitude),
            limit: parse_or(&lookup, "FEED_LIMIT", defaults.limit),
        };

        Self {
            feed_url: match lookup("FEED_URL") {
                Some(url) if url.trim().is_empty() => None,
                Some(url) => Some(url.trim().to_string()),
                None => Some(query.to_url()),
            },
            user_agent: lookup("HTTP_USER_AGENT")
                .unwrap_or_else(|| format!("quake-report/{}", env!("CARGO_PKG_VERSION"))),

            connect_timeout_secs: parse_or(&lookup, "HTTP_CONNECT_TIMEOUT_SECS", 15),
            read_timeout_secs: parse_or(&lookup, "HTTP_READ_TIMEOUT_SECS", 10),

            parse_policy: parse_policy(lookup("PARSE_POLICY")),

            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 8080),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

fn parse_policy(raw: Option<String>) -> ParsePolicy {
    match raw.map(|s| s.parse::<ParsePolicy>()) {
        Some(Ok(policy)) => policy,
        Some(Err(e)) => {
            warn!("Ignoring PARSE_POLICY: {}; using the default", e);
            ParsePolicy::default()
        }
        None => ParsePolicy::default(),
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_usgs_query() {
        let config = Config::default();
        assert_eq!(
            config.feed_url.as_deref(),
            Some("https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&orderby=time&minmag=6&limit=10")
        );
        assert_eq!(config.connect_timeout(), Duration::from_secs(15));
        assert_eq!(config.read_timeout(), Duration::from_secs(10));
        assert_eq!(config.parse_policy, ParsePolicy::StopAtFirstError);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn query_parts_are_overridable() {
        let config = config_from(&[("FEED_MIN_MAGNITUDE", "4.5"), ("FEED_LIMIT", "25")]);
        assert!(config.feed_url.unwrap().ends_with("minmag=4.5&limit=25"));
    }

    #[test]
    fn feed_url_wins_over_query_parts() {
        let config = config_from(&[
            ("FEED_URL", "http://localhost:9000/feed"),
            ("FEED_LIMIT", "25"),
        ]);
        assert_eq!(config.feed_url.as_deref(), Some("http://localhost:9000/feed"));
    }

    #[test]
    fn blank_feed_url_means_no_feed() {
        assert_eq!(config_from(&[("FEED_URL", "")]).feed_url, None);
        assert_eq!(config_from(&[("FEED_URL", "   ")]).feed_url, None);
    }

    #[test]
    fn unknown_parse_policy_falls_back_to_default() {
        let config = config_from(&[("PARSE_POLICY", "retry")]);
        assert_eq!(config.parse_policy, ParsePolicy::StopAtFirstError);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("HTTP_READ_TIMEOUT_SECS", "soon"),
            ("SERVER_PORT", "99999"),
            ("PARSE_POLICY", "skip"),
        ]);
        assert_eq!(config.read_timeout_secs, 10);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.parse_policy, ParsePolicy::SkipMalformed);
    }
}
