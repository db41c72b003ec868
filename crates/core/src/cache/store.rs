use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use tokio::sync::RwLock;

use crate::holiday::Holiday;

use super::CacheConfig;

/// Classification of a cached year relative to a point in time.
///
/// The class is recomputed on every TTL check rather than fixed at insertion:
/// an entry cached in December for the then-current year becomes a past-year
/// entry after New Year's and from then on never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearClass {
    Past,
    Current,
    Future,
}

impl YearClass {
    /// Classifies `year` against the calendar year of `now`.
    pub fn of(year: i32, now: DateTime<Utc>) -> Self {
        match year.cmp(&now.year()) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Future,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<Holiday>,
    inserted_at: DateTime<Utc>,
}

/// In-memory year→holidays cache with a per-year-class TTL policy.
///
/// Past years never expire once cached; the current year expires
/// `current_year_ttl` after insertion and future years `future_year_ttl`
/// after insertion. Entries are never handed out by reference; readers
/// receive copies.
///
/// Time-dependent operations have `*_at` variants taking an explicit `now`
/// so tests can drive the clock; the plain variants use `Utc::now()`.
#[derive(Debug, Clone)]
pub struct HolidayCache {
    entries: Arc<RwLock<HashMap<i32, CacheEntry>>>,
    config: CacheConfig,
}

impl HolidayCache {
    /// Creates an empty cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns a copy of the cached holidays for `year` if the entry is
    /// still valid.
    pub async fn get(&self, year: i32) -> Option<Vec<Holiday>> {
        self.get_at(year, Utc::now()).await
    }

    /// [`Self::get`] against an explicit clock.
    ///
    /// An expired entry is reported as a miss but left in place; it is
    /// overwritten by the next successful fetch or reaped by [`Self::sweep`].
    pub async fn get_at(&self, year: i32, now: DateTime<Utc>) -> Option<Vec<Holiday>> {
        let entries = self.entries.read().await;
        let entry = entries.get(&year)?;
        if self.is_fresh(year, entry, now) {
            Some(entry.data.clone())
        } else {
            tracing::debug!(year, "Cache entry expired");
            None
        }
    }

    /// Inserts or overwrites the entry for `year`, then enforces the
    /// emergency size cap.
    pub async fn insert(&self, year: i32, data: Vec<Holiday>) {
        self.insert_at(year, data, Utc::now()).await;
    }

    /// [`Self::insert`] against an explicit clock.
    pub async fn insert_at(&self, year: i32, data: Vec<Holiday>, now: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            year,
            CacheEntry {
                data,
                inserted_at: now,
            },
        );
        if entries.len() > self.config.max_entries {
            tracing::warn!(
                occupancy = entries.len(),
                max_entries = self.config.max_entries,
                "Cache over high-water mark, evicting oldest entries"
            );
            // The emergency cap ignores the preserve window; it only has to
            // bound memory until the next sweep.
            evict_oldest(&mut entries, self.config.shrink_to, None);
        }
    }

    /// Removes the entry for `year`. Returns true if one existed.
    pub async fn remove(&self, year: i32) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(&year).is_some()
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Number of entries, including expired ones not yet reaped.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Runs one cleanup pass: drop expired entries, then enforce the sweep
    /// occupancy target while preserving years close to the current one.
    pub async fn sweep(&self) {
        self.sweep_at(Utc::now()).await;
    }

    /// [`Self::sweep`] against an explicit clock.
    pub async fn sweep_at(&self, now: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|year, entry| self.is_fresh(*year, entry, now));
        let expired = before - entries.len();
        if entries.len() > self.config.sweep_shrink_to {
            let preserve = PreserveWindow {
                center: now.year(),
                radius: self.config.preserve_window_years,
            };
            evict_oldest(&mut entries, self.config.sweep_shrink_to, Some(preserve));
        }
        tracing::info!(expired, occupancy = entries.len(), "Cache sweep finished");
    }

    fn ttl_for(&self, class: YearClass) -> Option<Duration> {
        match class {
            YearClass::Past => None,
            YearClass::Current => Some(self.config.current_year_ttl),
            YearClass::Future => Some(self.config.future_year_ttl),
        }
    }

    fn is_fresh(&self, year: i32, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        match self.ttl_for(YearClass::of(year, now)) {
            None => true,
            Some(ttl) => match now.signed_duration_since(entry.inserted_at).to_std() {
                Ok(elapsed) => elapsed < ttl,
                // Inserted "after" now per the wall clock; treat as fresh.
                Err(_) => true,
            },
        }
    }
}

struct PreserveWindow {
    center: i32,
    radius: i32,
}

impl PreserveWindow {
    fn covers(&self, year: i32) -> bool {
        (year - self.center).abs() <= self.radius
    }
}

/// Evicts oldest-by-timestamp entries until `target` occupancy is reached or
/// nothing evictable remains. Years covered by `preserve` are skipped.
fn evict_oldest(
    entries: &mut HashMap<i32, CacheEntry>,
    target: usize,
    preserve: Option<PreserveWindow>,
) {
    while entries.len() > target {
        let victim = entries
            .iter()
            .filter(|(year, _)| preserve.as_ref().is_none_or(|w| !w.covers(**year)))
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(year, _)| *year);
        match victim {
            Some(year) => {
                tracing::debug!(year, "Evicting cache entry");
                entries.remove(&year);
            }
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(year: i32) -> Vec<Holiday> {
        vec![Holiday::national(
            format!("{year}-12-25"),
            "Natal".to_string(),
        )]
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn test_config() -> CacheConfig {
        CacheConfig {
            current_year_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            future_year_ttl: Duration::from_secs(30 * 24 * 60 * 60),
            max_entries: 4,
            shrink_to: 2,
            sweep_shrink_to: 3,
            preserve_window_years: 2,
            sweep_interval: Duration::from_secs(24 * 60 * 60),
        }
    }

    #[tokio::test]
    async fn test_past_year_never_expires() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2020, sample(2020), at(2021, 1, 1)).await;

        // Years later, still served.
        assert!(cache.get_at(2020, at(2030, 6, 1)).await.is_some());
    }

    #[tokio::test]
    async fn test_current_year_expires_after_seven_days() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2025, sample(2025), at(2025, 3, 1)).await;

        assert!(cache.get_at(2025, at(2025, 3, 7)).await.is_some());
        assert!(cache.get_at(2025, at(2025, 3, 9)).await.is_none());
    }

    #[tokio::test]
    async fn test_future_year_expires_after_thirty_days() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2030, sample(2030), at(2025, 3, 1)).await;

        assert!(cache.get_at(2030, at(2025, 3, 29)).await.is_some());
        assert!(cache.get_at(2030, at(2025, 4, 15)).await.is_none());
    }

    #[tokio::test]
    async fn test_entry_becomes_permanent_when_year_passes() {
        let cache = HolidayCache::new(test_config());
        // Inserted in December while 2025 is the current year.
        cache.insert_at(2025, sample(2025), at(2025, 12, 28)).await;

        // Months past the 7-day TTL, but 2025 is now a past year.
        assert!(cache.get_at(2025, at(2026, 6, 1)).await.is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_is_not_deleted_on_read() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2025, sample(2025), at(2025, 3, 1)).await;

        assert!(cache.get_at(2025, at(2025, 3, 20)).await.is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_returns_copy() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2020, sample(2020), at(2021, 1, 1)).await;

        let mut copy = cache.get_at(2020, at(2021, 1, 2)).await.unwrap();
        copy.clear();
        assert_eq!(cache.get_at(2020, at(2021, 1, 2)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_enforces_emergency_cap() {
        let cache = HolidayCache::new(test_config());
        for (i, year) in (2010..2015).enumerate() {
            cache
                .insert_at(year, sample(year), at(2025, 1, 1 + i as u32))
                .await;
        }

        // Fifth insert breached max_entries = 4 and shrank to 2, dropping
        // the oldest timestamps first.
        assert_eq!(cache.len().await, 2);
        assert!(cache.get_at(2013, at(2025, 1, 10)).await.is_some());
        assert!(cache.get_at(2014, at(2025, 1, 10)).await.is_some());
        assert!(cache.get_at(2010, at(2025, 1, 10)).await.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_refreshes_timestamp() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2025, sample(2025), at(2025, 3, 1)).await;
        cache.insert_at(2025, sample(2025), at(2025, 3, 10)).await;

        // Expired relative to the first insert, fresh relative to the second.
        assert!(cache.get_at(2025, at(2025, 3, 12)).await.is_some());
    }

    #[tokio::test]
    async fn test_sweep_drops_expired_entries() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2025, sample(2025), at(2025, 3, 1)).await;
        cache.insert_at(2020, sample(2020), at(2025, 3, 1)).await;

        cache.sweep_at(at(2025, 4, 1)).await;

        // The stale current-year entry is reaped; the past-year one stays.
        assert_eq!(cache.len().await, 1);
        assert!(cache.get_at(2020, at(2025, 4, 1)).await.is_some());
    }

    #[tokio::test]
    async fn test_sweep_cap_preserves_years_near_current() {
        let config = CacheConfig {
            max_entries: 16,
            sweep_shrink_to: 2,
            ..test_config()
        };
        let cache = HolidayCache::new(config);
        // Oldest timestamps belong to years inside the preserve window.
        cache.insert_at(2024, sample(2024), at(2025, 1, 1)).await;
        cache.insert_at(2026, sample(2026), at(2025, 1, 2)).await;
        cache.insert_at(2010, sample(2010), at(2025, 1, 3)).await;
        cache.insert_at(2011, sample(2011), at(2025, 1, 4)).await;

        cache.sweep_at(at(2025, 1, 5)).await;

        // Distant years go first even though they are newer.
        assert_eq!(cache.len().await, 2);
        assert!(cache.get_at(2024, at(2025, 1, 5)).await.is_some());
        assert!(cache.get_at(2026, at(2025, 1, 5)).await.is_some());
    }

    #[tokio::test]
    async fn test_sweep_stops_when_only_preserved_years_remain() {
        let config = CacheConfig {
            max_entries: 16,
            sweep_shrink_to: 1,
            ..test_config()
        };
        let cache = HolidayCache::new(config);
        cache.insert_at(2024, sample(2024), at(2025, 1, 1)).await;
        cache.insert_at(2025, sample(2025), at(2025, 1, 2)).await;
        cache.insert_at(2026, sample(2026), at(2025, 1, 3)).await;

        cache.sweep_at(at(2025, 1, 4)).await;

        // All entries sit inside the preserve window, so none is evictable
        // even though occupancy exceeds the target.
        assert_eq!(cache.len().await, 3);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let cache = HolidayCache::new(test_config());
        cache.insert_at(2020, sample(2020), at(2025, 1, 1)).await;

        assert!(cache.remove(2020).await);
        assert!(!cache.remove(2020).await);

        cache.insert_at(2020, sample(2020), at(2025, 1, 1)).await;
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
