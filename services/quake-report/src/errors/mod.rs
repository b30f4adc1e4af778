pub mod api_error;
pub mod config_error;
pub mod feed_error;

pub use api_error::*;
pub use config_error::*;
pub use feed_error::*;
