pub mod earthquake;
pub mod query;

pub use earthquake::*;
pub use query::*;
