//! Normalizes OpenWeatherMap payloads into [`CurrentWeather`] and [`ForecastDay`] records.
//!
//! Decoding is permissive: once the body is a JSON object, each field is extracted on its
//! own and falls back to its zero value when absent or mistyped. Only a body that is not a
//! JSON object at all is an error.

use crate::error::WeatherError;
use crate::types::current_weather::CurrentWeather;
use crate::types::endpoint::Endpoint;
use crate::types::forecast_day::ForecastDay;
use crate::types::units::UnitSystem;
use crate::weather_data::extractor::{
    field, first_element, opt_f64, opt_i64, opt_str, percent, rounded, text,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde_json::{Map, Value};

/// Parses a response body, requiring a top-level JSON object.
pub fn parse_payload(endpoint: Endpoint, body: &[u8]) -> Result<Value, WeatherError> {
    serde_json::from_slice::<Map<String, Value>>(body)
        .map(Value::Object)
        .map_err(|source| WeatherError::Decode { endpoint, source })
}

/// Decodes a current-weather payload.
///
/// `location` is carried through as given; the payload's own city name is ignored so the
/// record matches the key it is cached under.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use weather_gopher::{decode_current, UnitSystem};
///
/// let payload = json!({
///     "main": {"temp": 72.6, "humidity": 40},
///     "weather": [{"description": "clear sky"}],
///     "wind": {"speed": 5.4}
/// });
/// let weather = decode_current(&payload, "Boston", UnitSystem::Imperial);
/// assert_eq!(weather.temperature, 73);
/// assert_eq!(weather.condition, "clear sky");
/// assert_eq!(weather.humidity, 40);
/// assert_eq!(weather.wind_speed, 5);
/// ```
pub fn decode_current(payload: &Value, location: &str, units: UnitSystem) -> CurrentWeather {
    let weather = first_element(payload, "weather");

    CurrentWeather {
        location: location.to_string(),
        temperature: rounded(opt_f64(payload, &["main", "temp"])),
        condition: text(weather.and_then(|w| opt_str(w, &["description"]))),
        humidity: percent(opt_f64(payload, &["main", "humidity"])),
        wind_speed: rounded(opt_f64(payload, &["wind", "speed"])),
        units,
    }
}

/// The calendar date of a forecast entry's `dt` timestamp, seen from `offset`.
///
/// Returns `None` when the entry has no usable timestamp.
pub fn entry_date(entry: &Value, offset: &FixedOffset) -> Option<NaiveDate> {
    let seconds = opt_i64(entry, &["dt"])?;
    DateTime::from_timestamp(seconds, 0).map(|utc| utc.with_timezone(offset).date_naive())
}

/// Decodes one element of the forecast `list` for an already-determined date.
pub fn decode_forecast_entry(entry: &Value, date: NaiveDate, units: UnitSystem) -> ForecastDay {
    let weather = first_element(entry, "weather");

    ForecastDay {
        date,
        temp_min: rounded(opt_f64(entry, &["main", "temp_min"])),
        temp_max: rounded(opt_f64(entry, &["main", "temp_max"])),
        condition: text(weather.and_then(|w| opt_str(w, &["main"]))),
        description: text(weather.and_then(|w| opt_str(w, &["description"]))),
        humidity: percent(opt_f64(entry, &["main", "humidity"])),
        wind_speed: rounded(opt_f64(entry, &["wind", "speed"])),
        units,
    }
}

/// The raw entries under `list` of a forecast payload.
pub fn forecast_entries(payload: &Value) -> Option<&Vec<Value>> {
    field(payload, &["list"]).and_then(Value::as_array)
}

/// The location's UTC offset from `city.timezone` (seconds east of UTC), or UTC.
pub fn forecast_offset(payload: &Value) -> FixedOffset {
    opt_i64(payload, &["city", "timezone"])
        .and_then(|seconds| i32::try_from(seconds).ok())
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}
