//! Turns a USGS GeoJSON response body into [`Earthquake`] records.
//!
//! The walk reads `features[i].properties.{mag,place,time,url}`. Parsing
//! never fails outright: problems are logged and the caller gets whatever
//! records were read, so a returned list is best effort and may be short.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::domain::Earthquake;
use crate::errors::{ConfigError, FeedError};

/// What to do when one feature is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Abandon the walk and keep the records read before the bad feature.
    #[default]
    StopAtFirstError,
    /// Log and skip the bad feature, keep walking.
    SkipMalformed,
}

impl FromStr for ParsePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" | "stop_at_first_error" => Ok(ParsePolicy::StopAtFirstError),
            "skip" | "skip_malformed" => Ok(ParsePolicy::SkipMalformed),
            _ => Err(ConfigError::UnknownParsePolicy(s.to_string())),
        }
    }
}

/// Records plus what, if anything, kept the list from being complete.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub earthquakes: Vec<Earthquake>,
    /// The failure that ended the walk early.
    pub error: Option<FeedError>,
    /// Features dropped under [`ParsePolicy::SkipMalformed`].
    pub skipped: usize,
}

impl ParseReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.skipped == 0
    }
}

/// Parse with the default policy, keeping only the records.
///
/// Accepts a `&str` or `None`; empty or absent input gives an empty list.
pub fn extract_earthquakes<'a>(body: impl Into<Option<&'a str>>) -> Vec<Earthquake> {
    parse_report(body, ParsePolicy::default()).earthquakes
}

pub fn parse_report<'a>(body: impl Into<Option<&'a str>>, policy: ParsePolicy) -> ParseReport {
    let mut report = ParseReport::default();

    let body = match body.into() {
        Some(body) if !body.is_empty() => body,
        _ => return report,
    };

    if let Err(e) = walk_features(body, policy, &mut report) {
        error!(
            "Problem parsing the earthquake JSON results after {} records: {}",
            report.earthquakes.len(),
            e
        );
        report.error = Some(e);
    }

    report
}

fn walk_features(body: &str, policy: ParsePolicy, report: &mut ParseReport) -> Result<(), FeedError> {
    let root: Value = serde_json::from_str(body)?;
    let root = root.as_object().ok_or_else(|| FeedError::WrongType {
        field: "(root)",
        path: "$".to_string(),
        expected: "an object",
    })?;

    let features = required(root, "features", "$")?
        .as_array()
        .ok_or_else(|| wrong_type("features", "$", "an array"))?;

    for (index, feature) in features.iter().enumerate() {
        match parse_feature(feature, index) {
            Ok(quake) => report.earthquakes.push(quake),
            Err(e) if policy == ParsePolicy::SkipMalformed => {
                warn!("Skipping malformed feature {}: {}", index, e);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn parse_feature(feature: &Value, index: usize) -> Result<Earthquake, FeedError> {
    let path = format!("features[{}]", index);
    let feature = feature
        .as_object()
        .ok_or_else(|| wrong_type("features", &path, "an object"))?;

    let properties = required(feature, "properties", &path)?
        .as_object()
        .ok_or_else(|| wrong_type("properties", &path, "an object"))?;
    let path = format!("{}.properties", path);

    let magnitude = read_f64(properties, "mag", &path)?;
    let place = read_string(properties, "place", &path)?;
    let time = read_i64(properties, "time", &path)?;
    let url = read_string(properties, "url", &path)?;

    Ok(Earthquake::new(magnitude, place, time, url))
}

fn required<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'v Value, FeedError> {
    object.get(field).ok_or_else(|| FeedError::MissingField {
        field,
        path: path.to_string(),
    })
}

fn wrong_type(field: &'static str, path: &str, expected: &'static str) -> FeedError {
    FeedError::WrongType {
        field,
        path: path.to_string(),
        expected,
    }
}

/// A number, or a string holding one.
fn read_f64(object: &Map<String, Value>, field: &'static str, path: &str) -> Result<f64, FeedError> {
    let parsed = match required(object, field, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };
    parsed.ok_or_else(|| wrong_type(field, path, "a number"))
}

/// An integer, or a float or numeric string truncated toward zero.
fn read_i64(object: &Map<String, Value>, field: &'static str, path: &str) -> Result<i64, FeedError> {
    let parsed = match required(object, field, path)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    };
    parsed.ok_or_else(|| wrong_type(field, path, "an integer"))
}

fn truncate(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && in_range).then_some(f.trunc() as i64)
}

/// Strings are taken as is; any other present value is rendered as JSON
/// text, so `null` reads as `"null"` and `123` as `"123"`.
fn read_string(object: &Map<String, Value>, field: &'static str, path: &str) -> Result<String, FeedError> {
    let value = required(object, field, path)?;
    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
