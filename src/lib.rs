//! Current weather and 5-day forecasts from OpenWeatherMap.
//!
//! [`WeatherClient`] fetches and normalizes the upstream payloads. Current-weather lookups
//! are cached on disk for 30 minutes per location by a [`WeatherCache`]; forecasts are
//! reduced to one sample per calendar day by a [`ForecastReducer`].

mod cache;
mod clients;
mod error;
mod types;
mod utils;
mod weather_data;

pub use error::WeatherError;

pub use clients::weather_client::*;

pub use cache::entry::CacheEntry;
pub use cache::error::CacheError;
pub use cache::store::{CacheStore, FileStore, MemoryStore};
pub use cache::weather_cache::{WeatherCache, CACHE_TTL};

pub use types::current_weather::CurrentWeather;
pub use types::endpoint::Endpoint;
pub use types::forecast_day::ForecastDay;
pub use types::units::UnitSystem;

pub use utils::get_cache_dir;
pub use weather_data::decoder::{
    decode_current, decode_forecast_entry, entry_date, forecast_entries, forecast_offset,
    parse_payload,
};
pub use weather_data::reducer::{ForecastReducer, MAX_FORECAST_DAYS};
