use crate::types::units::UnitSystem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One representative forecast sample for a calendar day.
///
/// This is the first 3-hour sample the upstream feed reports for `date`, not an
/// aggregate over the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_min: i32,
    pub temp_max: i32,
    /// Short condition group, e.g. `"Rain"`.
    pub condition: String,
    /// Longer description, e.g. `"light rain"`.
    pub description: String,
    pub humidity: u8,
    pub wind_speed: i32,
    pub units: UnitSystem,
}
