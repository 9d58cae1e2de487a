//! Time-bounded cache of current-weather lookups, keyed by location.

use crate::cache::entry::CacheEntry;
use crate::cache::error::CacheError;
use crate::cache::store::{CacheStore, FileStore, MemoryStore};
use crate::types::current_weather::CurrentWeather;
use chrono::{DateTime, Utc};
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

/// How long a cached record stays usable.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Caches [`CurrentWeather`] records by location for [`CACHE_TTL`].
///
/// Keys are the location strings exactly as given: `"New York"` and `"new york"` are
/// separate entries. A missing, unreadable or expired entry is simply a miss.
///
/// # Examples
///
/// ```
/// use weather_gopher::{CurrentWeather, UnitSystem, WeatherCache};
///
/// let cache = WeatherCache::in_memory();
/// let weather = CurrentWeather {
///     location: "Boston".to_string(),
///     temperature: 73,
///     condition: "clear sky".to_string(),
///     humidity: 40,
///     wind_speed: 5,
///     units: UnitSystem::Imperial,
/// };
///
/// cache.put("Boston", &weather).unwrap();
/// assert_eq!(cache.get("Boston"), Some(weather));
/// assert_eq!(cache.get("boston"), None);
/// ```
#[derive(Debug)]
pub struct WeatherCache {
    store: Box<dyn CacheStore>,
    ttl: Duration,
}

impl WeatherCache {
    /// Wraps any [`CacheStore`] with the default TTL.
    pub fn new(store: impl CacheStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            ttl: CACHE_TTL,
        }
    }

    /// A file-backed cache in `<user cache dir>/weather-gopher`, or under the system temp
    /// directory when the platform has no user cache directory.
    pub fn in_default_dir() -> Self {
        Self::new(FileStore::in_default_dir())
    }

    /// A cache that lives only as long as this value.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Overrides how long records stay usable.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the record cached for `location` if it is younger than the TTL.
    pub fn get(&self, location: &str) -> Option<CurrentWeather> {
        self.get_at(location, Utc::now())
    }

    fn get_at(&self, location: &str, now: DateTime<Utc>) -> Option<CurrentWeather> {
        let entry = self.store.load(location)?;
        if !entry.is_fresh(now, self.ttl) {
            debug!(
                "Cached weather for '{}' from {} is stale",
                location, entry.fetched_at
            );
            return None;
        }
        Some(entry.weather)
    }

    /// Stores `weather` for `location`, stamped with the current time.
    pub fn put(&self, location: &str, weather: &CurrentWeather) -> Result<(), CacheError> {
        self.store
            .store(location, &CacheEntry::new(weather.clone()))
    }

    /// The file that holds `location`'s record, when the cache is file backed.
    pub fn entry_path(&self, location: &str) -> Option<PathBuf> {
        self.store.entry_path(location)
    }
}
