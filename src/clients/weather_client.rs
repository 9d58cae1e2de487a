//! The main entry point: fetches current weather and forecasts from OpenWeatherMap.

use crate::cache::weather_cache::WeatherCache;
use crate::error::WeatherError;
use crate::types::current_weather::CurrentWeather;
use crate::types::endpoint::Endpoint;
use crate::types::forecast_day::ForecastDay;
use crate::types::units::UnitSystem;
use crate::weather_data::decoder::{
    decode_current, forecast_entries, forecast_offset, parse_payload,
};
use crate::weather_data::reducer::ForecastReducer;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task;

/// The OpenWeatherMap 2.5 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// The environment variable [`api_key_from_env`] reads.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("weather-gopher/", env!("CARGO_PKG_VERSION"));

/// Reads the API key from `OPENWEATHER_API_KEY`. An empty value counts as unset.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

/// Client for the OpenWeatherMap current-weather and forecast endpoints.
///
/// Current-weather lookups go through a [`WeatherCache`] first and only reach the network
/// on a miss. Forecasts are always fetched live. Each call makes at most one request, with
/// a 10 second timeout and no retries.
///
/// The API key is handed in when the client is built; the client never reads the
/// environment on its own. Use [`api_key_from_env`] for the conventional lookup.
///
/// # Examples
///
/// ```no_run
/// use weather_gopher::{api_key_from_env, UnitSystem, WeatherClient, WeatherError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherError> {
/// let client = WeatherClient::builder()
///     .maybe_api_key(api_key_from_env())
///     .units(UnitSystem::Metric)
///     .build()?;
///
/// let now = client.current("Amsterdam").await?;
/// println!("{} {}", now.temperature, now.units.temperature_label());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: Option<String>,
    units: UnitSystem,
    base_url: String,
    cache: Arc<WeatherCache>,
}

#[bon]
impl WeatherClient {
    /// Builds a client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(impl Into<String>)`: Optional. The OpenWeatherMap API key. Without one
    ///   (or with an empty one), live requests fail with [`WeatherError::MissingCredential`];
    ///   cached current weather is still served.
    /// * `.units(UnitSystem)`: Optional. Defaults to [`UnitSystem::Imperial`].
    /// * `.base_url(impl Into<String>)`: Optional. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.cache(WeatherCache)`: Optional. Defaults to [`WeatherCache::in_default_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::HttpClient`] if the HTTP client cannot be initialized.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: Option<String>,
        #[builder(default)] units: UnitSystem,
        #[builder(into, default = DEFAULT_BASE_URL.to_string())] base_url: String,
        cache: Option<WeatherCache>,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(WeatherError::HttpClient)?;

        Ok(Self {
            http,
            api_key: api_key.filter(|key| !key.is_empty()),
            units,
            base_url,
            cache: Arc::new(cache.unwrap_or_else(WeatherCache::in_default_dir)),
        })
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    /// Current weather for `location`.
    ///
    /// A record cached for the same location string within the last 30 minutes is
    /// returned without touching the network. Otherwise the record is fetched, decoded,
    /// and written back to the cache. A failed cache write is logged and otherwise
    /// ignored.
    ///
    /// # Errors
    ///
    /// * [`WeatherError::MissingCredential`] on a cache miss without an API key. No
    ///   request is made.
    /// * [`WeatherError::Network`] for connection failures and timeouts.
    /// * [`WeatherError::Upstream`] for non-success HTTP statuses.
    /// * [`WeatherError::Decode`] when the body is not a JSON object.
    pub async fn current(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        if let Some(weather) = self.cached(location).await {
            info!("Using cached weather data for '{}'", location);
            return Ok(weather);
        }

        let payload = self.fetch(Endpoint::Current, location).await?;
        let weather = decode_current(&payload, location, self.units);
        self.remember(location, &weather).await;
        Ok(weather)
    }

    /// Up to five days of forecast for `location`, one sample per calendar day.
    ///
    /// Each day is represented by the first 3-hour sample the upstream feed reports for it,
    /// with days computed in the location's own UTC offset. Forecasts are never cached.
    ///
    /// # Errors
    ///
    /// The same as [`WeatherClient::current`], plus [`WeatherError::UnexpectedFormat`] when
    /// the response has no `list` array.
    pub async fn forecast(&self, location: &str) -> Result<Vec<ForecastDay>, WeatherError> {
        let endpoint = Endpoint::Forecast;
        let payload = self.fetch(endpoint, location).await?;
        let entries = forecast_entries(&payload).ok_or(WeatherError::UnexpectedFormat {
            endpoint,
            field: "list",
        })?;

        let days: Vec<ForecastDay> =
            ForecastReducer::new(entries, forecast_offset(&payload), self.units).collect();
        debug!(
            "Reduced {} forecast entries for '{}' to {} days",
            entries.len(),
            location,
            days.len()
        );
        Ok(days)
    }

    async fn fetch(&self, endpoint: Endpoint, location: &str) -> Result<Value, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        info!("Requesting {} data for '{}'", endpoint, location);
        let response = self
            .http
            .get(endpoint.url(&self.base_url))
            .query(&[
                ("q", location),
                ("appid", api_key),
                ("units", self.units.query_value()),
            ])
            .send()
            .await
            .map_err(|source| network_error(endpoint, source))?;

        let status = response.status();
        if !status.is_success() {
            warn!("The {} endpoint answered {} for '{}'", endpoint, status, location);
            return Err(WeatherError::Upstream { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| network_error(endpoint, source))?;
        parse_payload(endpoint, &body)
    }

    async fn cached(&self, location: &str) -> Option<CurrentWeather> {
        let cache = Arc::clone(&self.cache);
        let key = location.to_string();
        match task::spawn_blocking(move || cache.get(&key)).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!("Cache lookup for '{}' did not complete: {}", location, e);
                None
            }
        }
    }

    async fn remember(&self, location: &str, weather: &CurrentWeather) {
        let cache = Arc::clone(&self.cache);
        let key = location.to_string();
        let weather = weather.clone();
        match task::spawn_blocking(move || cache.put(&key, &weather)).await {
            Ok(Ok(())) => debug!("Cached weather data for '{}'", location),
            Ok(Err(e)) => warn!("Failed to cache weather data for '{}': {:?}", location, e),
            Err(e) => warn!("Cache write for '{}' did not complete: {}", location, e),
        }
    }
}

/// reqwest errors carry the request URL, and the URL carries the API key.
fn network_error(endpoint: Endpoint, source: reqwest::Error) -> WeatherError {
    WeatherError::Network {
        endpoint,
        source: source.without_url(),
    }
}

impl fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("units", &self.units)
            .field("base_url", &self.base_url)
            .field("cache", &self.cache)
            .finish()
    }
}
