use crate::types::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Current conditions for a location, normalized from the upstream payload.
///
/// Readings that were missing or mistyped upstream are zero. `temperature` and
/// `wind_speed` are rounded to whole units of [`CurrentWeather::units`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// The location exactly as it was requested.
    pub location: String,
    pub temperature: i32,
    /// Free-text condition, e.g. `"clear sky"`.
    pub condition: String,
    /// Relative humidity in percent, 0 to 100.
    pub humidity: u8,
    pub wind_speed: i32,
    pub units: UnitSystem,
}
