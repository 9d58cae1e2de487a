pub mod entry;
pub mod error;
pub mod store;
pub mod weather_cache;
