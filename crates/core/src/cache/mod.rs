//! In-memory TTL cache for fetched holiday lists.

mod config;
mod store;

pub use config::CacheConfig;
pub use store::{HolidayCache, YearClass};
