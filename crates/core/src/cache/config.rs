use std::{env, time::Duration};

/// Tuning knobs for [`super::HolidayCache`], loaded from environment
/// variables.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for current-year entries (default: 7 days).
    pub current_year_ttl: Duration,
    /// TTL for future-year entries (default: 30 days).
    pub future_year_ttl: Duration,
    /// High-water mark checked on every insert (default: 256).
    pub max_entries: usize,
    /// Occupancy after an emergency eviction (default: 192).
    pub shrink_to: usize,
    /// Occupancy target enforced by the periodic sweep (default: 224).
    pub sweep_shrink_to: usize,
    /// Years within this distance of the current year survive sweep
    /// eviction (default: 2).
    pub preserve_window_years: i32,
    /// Interval between background sweeps (default: 24 hours).
    pub sweep_interval: Duration,
}

const DAY_SECONDS: u64 = 24 * 60 * 60;

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FERIADOS_CURRENT_YEAR_TTL_DAYS` - current-year TTL (default: 7)
    /// - `FERIADOS_FUTURE_YEAR_TTL_DAYS` - future-year TTL (default: 30)
    /// - `FERIADOS_CACHE_MAX_ENTRIES` - insert-time high-water mark (default: 256)
    /// - `FERIADOS_CACHE_SHRINK_TO` - post-eviction occupancy (default: 192)
    /// - `FERIADOS_CACHE_SWEEP_SHRINK_TO` - sweep occupancy target (default: 224)
    /// - `FERIADOS_CACHE_SWEEP_INTERVAL_HOURS` - sweep interval (default: 24)
    pub fn from_env() -> Self {
        Self {
            current_year_ttl: Duration::from_secs(
                env_parse("FERIADOS_CURRENT_YEAR_TTL_DAYS", 7) * DAY_SECONDS,
            ),
            future_year_ttl: Duration::from_secs(
                env_parse("FERIADOS_FUTURE_YEAR_TTL_DAYS", 30) * DAY_SECONDS,
            ),
            max_entries: env_parse("FERIADOS_CACHE_MAX_ENTRIES", 256) as usize,
            shrink_to: env_parse("FERIADOS_CACHE_SHRINK_TO", 192) as usize,
            sweep_shrink_to: env_parse("FERIADOS_CACHE_SWEEP_SHRINK_TO", 224) as usize,
            preserve_window_years: 2,
            sweep_interval: Duration::from_secs(
                env_parse("FERIADOS_CACHE_SWEEP_INTERVAL_HOURS", 24) * 60 * 60,
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
