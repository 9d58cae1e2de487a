pub mod current_weather;
pub mod endpoint;
pub mod forecast_day;
pub mod units;
