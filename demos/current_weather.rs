use std::env;
use weather_gopher::{api_key_from_env, WeatherClient, API_KEY_ENV};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let location = env::args()
        .nth(1)
        .ok_or("usage: current_weather <location>")?;

    let api_key = api_key_from_env();
    if api_key.is_none() {
        eprintln!("{} is not set; only cached data can be shown", API_KEY_ENV);
    }

    let client = WeatherClient::builder().maybe_api_key(api_key).build()?;
    let weather = client.current(&location).await?;
    let units = weather.units;

    println!("=================================");
    println!("  Weather for {}", weather.location);
    println!("=================================");
    println!("Temperature: {}{}", weather.temperature, units.temperature_label());
    println!("Condition:   {}", weather.condition);
    println!("Humidity:    {}%", weather.humidity);
    println!("Wind Speed:  {} {}", weather.wind_speed, units.speed_label());
    println!("=================================");

    if let Some(path) = client.cache().entry_path(&location) {
        println!("(cached at {})", path.display());
    }
    Ok(())
}
