//! The holiday lookup façade.
//!
//! Lookup order for a year: bundled static table (unless bypassed), then the
//! TTL cache, then one fetch from the provider with write-through to the
//! cache. Fetches are single-flight per year: concurrent callers for the
//! same year share one in-flight request instead of racing independent ones.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use feriados_core::cache::{CacheConfig, HolidayCache};
use feriados_core::date::{self, DateInput};
use feriados_core::holiday::Holiday;
use feriados_core::statics::StaticTable;

use crate::api::{BrasilApiClient, FetchHolidays};
use crate::error::{Error, Result};

/// Accepted year range for lookups.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2300;

/// Configuration for [`HolidayService`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Always bypass the bundled static table and go straight to the
    /// cache/fetcher.
    pub skip_static_data: bool,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FERIADOS_SKIP_STATIC_DATA` - set to "1" or "true" to bypass the
    ///   bundled table
    pub fn from_env() -> Self {
        let skip_static_data = std::env::var("FERIADOS_SKIP_STATIC_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { skip_static_data }
    }
}

/// Holiday lookups combining the bundled table, the TTL cache and the
/// remote fetcher.
#[derive(Clone)]
pub struct HolidayService {
    statics: StaticTable,
    cache: HolidayCache,
    fetcher: Arc<dyn FetchHolidays>,
    inflight: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
    skip_static_data: bool,
}

impl HolidayService {
    /// Creates a service with the bundled table, a fresh cache and the
    /// Brasil API fetcher.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_parts(
            StaticTable::bundled().clone(),
            HolidayCache::new(CacheConfig::from_env()),
            Arc::new(BrasilApiClient::from_env()),
            config,
        )
    }

    /// Creates a service from explicit parts (used by tests to inject a
    /// static table and a mock fetcher).
    pub fn with_parts(
        statics: StaticTable,
        cache: HolidayCache,
        fetcher: Arc<dyn FetchHolidays>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            statics,
            cache,
            fetcher,
            inflight: Arc::new(Mutex::new(HashMap::new())),
            skip_static_data: config.skip_static_data,
        }
    }

    /// The cache backing this service.
    pub fn cache(&self) -> &HolidayCache {
        &self.cache
    }

    /// Returns the holidays for `year`.
    pub async fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidYear(year));
        }

        if !self.skip_static_data {
            if let Some(holidays) = self.statics.get(year) {
                tracing::debug!(year, "Serving bundled holidays");
                return Ok(holidays);
            }
        }

        if let Some(holidays) = self.cache.get(year).await {
            tracing::debug!(year, "Serving cached holidays");
            return Ok(holidays);
        }

        let guard = self.year_guard(year).await;
        let _locked = guard.lock().await;

        // A concurrent leader may have populated the cache while this call
        // waited on the guard.
        if let Some(holidays) = self.cache.get(year).await {
            return Ok(holidays);
        }

        match self.fetcher.fetch_holidays(year).await {
            Ok(holidays) => {
                self.cache.insert(year, holidays.clone()).await;
                Ok(holidays)
            }
            Err(err) => {
                tracing::warn!(year, error = %err, "Holiday fetch failed, dropping cache entry");
                self.cache.remove(year).await;
                Err(err.into())
            }
        }
    }

    /// Returns true iff `date` normalizes to the date of some holiday in its
    /// year.
    ///
    /// Matching is exact string equality against the record's `date` field;
    /// provider records are not re-normalized on ingestion.
    pub async fn is_holiday(&self, date: impl Into<DateInput>) -> Result<bool> {
        let canonical = date::normalize(&date.into())?;
        let year = date::year_of(&canonical)?;
        let holidays = self.get_holidays(year).await?;
        Ok(holidays.iter().any(|h| h.date == canonical))
    }

    async fn year_guard(&self, year: i32) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight
            .entry(year)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
