use tracing::info;

use crate::clients::UsgsClient;
use crate::domain::Earthquake;
use crate::parser::{parse_report, ParsePolicy, ParseReport};

pub struct QuakeService;

impl QuakeService {
    /// Fetch the feed at `url` and parse it into records.
    ///
    /// Never fails: fetch and parse problems are logged and show up as a
    /// shorter (possibly empty) list.
    pub async fn fetch_earthquake_data(client: &UsgsClient, url: &str) -> Vec<Earthquake> {
        Self::fetch_report(client, url, ParsePolicy::default())
            .await
            .earthquakes
    }

    /// Like [`QuakeService::fetch_earthquake_data`], but keeps the parse
    /// outcome so callers can tell a complete list from a truncated one.
    pub async fn fetch_report(client: &UsgsClient, url: &str, policy: ParsePolicy) -> ParseReport {
        let body = client.fetch_body(url).await;
        let report = parse_report(body.as_str(), policy);

        info!(
            "Earthquake pipeline finished: {} records (complete={})",
            report.earthquakes.len(),
            report.is_complete()
        );

        report
    }
}
