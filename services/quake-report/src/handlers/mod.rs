pub mod earthquake_handler;
pub mod health;

pub use earthquake_handler::*;
pub use health::*;
