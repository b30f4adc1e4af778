pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod parser;
pub mod routes;
pub mod services;

pub use clients::UsgsClient;
pub use config::Config;
pub use domain::{Earthquake, FeedQuery};
pub use errors::{ApiError, FeedError};
pub use parser::{extract_earthquakes, parse_report, ParsePolicy, ParseReport};
pub use services::scheduler::AppState;
pub use services::{EarthquakeLoader, QuakeService};
