//! feriados_client - holiday lookups for Brazil, backed by the bundled
//! snapshot with a TTL-cached fallback to the Brasil API.

pub mod api;
pub mod error;
pub mod service;
pub mod sweeper;

pub use api::{BrasilApiClient, FetchHolidays};
pub use error::{ApiError, Error, Result};
pub use service::{HolidayService, ServiceConfig};
pub use sweeper::Sweeper;
