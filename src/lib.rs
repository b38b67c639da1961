pub mod date;
pub mod process;
pub mod prompt;
pub mod query;
pub mod trains;

pub use query::{find_trains, Criteria, Query, QueryError, MAX_RESULTS};
pub use trains::Train;
