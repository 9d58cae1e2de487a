//! Defines the unit systems understood by the OpenWeatherMap API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit system numeric readings are expressed in.
///
/// The variant is sent upstream as the `units` query parameter and is stored alongside
/// every decoded record, so a temperature is never separated from its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Fahrenheit and miles per hour.
    #[default]
    Imperial,
    /// Celsius and meters per second.
    Metric,
    /// Kelvin and meters per second.
    Standard,
}

impl UnitSystem {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
            UnitSystem::Standard => "standard",
        }
    }

    /// Label for temperatures in this unit system, e.g. `"°F"`.
    pub fn temperature_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "°F",
            UnitSystem::Metric => "°C",
            UnitSystem::Standard => "K",
        }
    }

    /// Label for wind speeds in this unit system, e.g. `"mph"`.
    pub fn speed_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mph",
            UnitSystem::Metric | UnitSystem::Standard => "m/s",
        }
    }
}

/// Formats a `UnitSystem` as its query value.
///
/// # Examples
///
/// ```
/// use weather_gopher::UnitSystem;
///
/// assert_eq!(UnitSystem::Metric.to_string(), "metric");
/// assert_eq!(UnitSystem::default().to_string(), "imperial");
/// ```
impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}
