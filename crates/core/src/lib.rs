//! feriados_core - domain types, date normalization, the bundled holiday
//! table and the TTL cache for the feriados project.
//!
//! This crate has no network dependency; the HTTP fetcher and the lookup
//! façade live in `feriados_client`.

pub mod cache;
pub mod date;
pub mod holiday;
pub mod statics;

pub use cache::{CacheConfig, HolidayCache};
pub use date::{normalize, year_of, DateError, DateInput};
pub use holiday::Holiday;
pub use statics::StaticTable;
