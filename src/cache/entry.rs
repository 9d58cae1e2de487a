use crate::types::current_weather::CurrentWeather;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A cached [`CurrentWeather`] record and the moment it was fetched.
///
/// This is also the on-disk format: a JSON object with `weather` and `fetched_at`
/// (RFC 3339, UTC) fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub weather: CurrentWeather,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Stamps `weather` with the current time.
    pub fn new(weather: CurrentWeather) -> Self {
        Self {
            weather,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the entry may still be served at `now`.
    ///
    /// An entry is usable while its age does not exceed `ttl`. Entries stamped in the
    /// future are never usable.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .is_ok_and(|age| age <= ttl)
    }
}
