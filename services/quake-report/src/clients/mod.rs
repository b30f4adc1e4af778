pub mod usgs_client;

pub use usgs_client::UsgsClient;
