pub mod loader;
pub mod quake_service;
pub mod scheduler;

pub use loader::{EarthquakeLoader, Snapshot};
pub use quake_service::QuakeService;
pub use scheduler::start_initial_load;
