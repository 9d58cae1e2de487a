//! Reduces the 3-hourly forecast feed to one sample per calendar day.

use crate::types::forecast_day::ForecastDay;
use crate::types::units::UnitSystem;
use crate::weather_data::decoder::{decode_forecast_entry, entry_date};
use chrono::{FixedOffset, NaiveDate};
use serde_json::Value;

/// Maximum number of days a reduced forecast contains.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Lazily turns raw forecast entries into at most [`MAX_FORECAST_DAYS`] [`ForecastDay`]s.
///
/// The first entry seen for each calendar day represents that day; later entries for the
/// same day are skipped. A partial first day (a feed starting mid-afternoon) still counts
/// as a day. Entries without a usable `dt` timestamp are skipped, as are entries dated on
/// or before the last day already produced, so output dates always strictly increase.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, NaiveDate};
/// use serde_json::json;
/// use weather_gopher::{ForecastReducer, UnitSystem};
///
/// // Three samples on 2023-11-14 (UTC), one on 2023-11-15.
/// let feed = vec![
///     json!({"dt": 1_699_920_000, "main": {"temp_min": 40.2}}),
///     json!({"dt": 1_699_930_800, "main": {"temp_min": 45.0}}),
///     json!({"dt": 1_699_941_600}),
///     json!({"dt": 1_700_006_400, "weather": [{"main": "Snow"}]}),
/// ];
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let days: Vec<_> = ForecastReducer::new(&feed, utc, UnitSystem::Imperial).collect();
///
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
/// assert_eq!(days[0].temp_min, 40);
/// assert_eq!(days[1].condition, "Snow");
/// ```
#[derive(Debug, Clone)]
pub struct ForecastReducer<I> {
    entries: I,
    offset: FixedOffset,
    units: UnitSystem,
    last_day: Option<NaiveDate>,
    produced: usize,
}

impl<'a, I> ForecastReducer<I>
where
    I: Iterator<Item = &'a Value>,
{
    /// Creates a reducer over `entries`, computing calendar dates in `offset`.
    pub fn new<T>(entries: T, offset: FixedOffset, units: UnitSystem) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            entries: entries.into_iter(),
            offset,
            units,
            last_day: None,
            produced: 0,
        }
    }
}

impl<'a, I> Iterator for ForecastReducer<I>
where
    I: Iterator<Item = &'a Value>,
{
    type Item = ForecastDay;

    fn next(&mut self) -> Option<ForecastDay> {
        if self.produced >= MAX_FORECAST_DAYS {
            return None;
        }

        for entry in self.entries.by_ref() {
            let Some(date) = entry_date(entry, &self.offset) else {
                continue;
            };
            if self.last_day.is_some_and(|last| date <= last) {
                continue;
            }

            self.last_day = Some(date);
            self.produced += 1;
            return Some(decode_forecast_entry(entry, date, self.units));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(MAX_FORECAST_DAYS - self.produced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use serde_json::json;

    const THREE_HOURS: i64 = 3 * 3600;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn start_of(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// A feed of `count` entries, 3 hours apart, starting at `start` (UTC). Each entry's
    /// `temp_min` encodes its index so tests can tell which sample was kept.
    fn feed(start: NaiveDateTime, count: usize) -> Vec<Value> {
        let first = start.and_utc().timestamp();
        (0..count)
            .map(|i| {
                json!({
                    "dt": first + i as i64 * THREE_HOURS,
                    "main": {"temp_min": i as f64, "temp_max": 60.4, "humidity": 70},
                    "weather": [{"main": "Clouds", "description": "broken clouds"}],
                    "wind": {"speed": 3.2}
                })
            })
            .collect()
    }

    fn reduce(entries: &[Value]) -> Vec<ForecastDay> {
        ForecastReducer::new(entries, utc(), UnitSystem::Imperial).collect()
    }

    #[test]
    fn test_forty_entries_reduce_to_five_midnight_samples() {
        let start = start_of(2024, 3, 1);
        let days = reduce(&feed(start, 40));

        assert_eq!(days.len(), 5);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.date, start.date() + Duration::days(i as i64));
            // Day i starts at entry 8 * i.
            assert_eq!(day.temp_min, (8 * i) as i32);
            assert_eq!(day.temp_max, 60);
            assert_eq!(day.description, "broken clouds");
        }
    }

    #[test]
    fn test_partial_first_day_is_kept() {
        // Starting at 15:00 leaves three samples on the first day.
        let start = start_of(2024, 3, 1) + Duration::hours(15);
        let days = reduce(&feed(start, 40));

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, start.date());
        assert_eq!(days[0].temp_min, 0);
        assert_eq!(days[1].date, start.date() + Duration::days(1));
        assert_eq!(days[1].temp_min, 3);
    }

    #[test]
    fn test_output_length_is_min_of_days_and_five() {
        let start = start_of(2024, 12, 30);
        for days_spanned in 1..=7usize {
            let entries = feed(start, days_spanned * 8);
            let days = reduce(&entries);
            assert_eq!(days.len(), days_spanned.min(MAX_FORECAST_DAYS));
            assert!(days.windows(2).all(|pair| pair[0].date < pair[1].date));
        }
    }

    #[test]
    fn test_empty_feed() {
        assert!(reduce(&[]).is_empty());
    }

    #[test]
    fn test_undatable_entries_are_skipped() {
        let mut entries = feed(start_of(2024, 3, 1), 16);
        entries.insert(0, json!("garbage"));
        entries.insert(1, json!({"main": {"temp_min": 99}}));
        entries.insert(2, json!({"dt": "yesterday"}));

        let days = reduce(&entries);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].temp_min, 0);
        assert_eq!(days[1].temp_min, 8);
    }

    #[test]
    fn test_entries_for_earlier_days_never_reorder_output() {
        let mut entries = feed(start_of(2024, 3, 2), 8);
        // A sample from the previous day arriving late.
        entries.insert(3, feed(start_of(2024, 3, 1), 1).remove(0));
        entries.extend(feed(start_of(2024, 3, 3), 1));

        let days = reduce(&entries);
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_offset_shifts_day_boundaries() {
        // 00:00 UTC is still the previous evening at UTC-5.
        let entries = feed(start_of(2024, 3, 1), 8);
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let days: Vec<_> = ForecastReducer::new(&entries, new_york, UnitSystem::Metric).collect();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[1].temp_min, 2);
        assert_eq!(days[1].units, UnitSystem::Metric);
    }

    #[test]
    fn test_reducer_is_lazy() {
        let entries = feed(start_of(2024, 3, 1), 40);
        let mut reducer = ForecastReducer::new(&entries, utc(), UnitSystem::Imperial);
        assert!(reducer.next().is_some());
        assert_eq!(reducer.size_hint(), (0, Some(4)));
    }
}
