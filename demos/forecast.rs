use std::env;
use weather_gopher::{api_key_from_env, UnitSystem, WeatherClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let location = args.next().ok_or("usage: forecast <location> [metric]")?;
    let units = match args.next().as_deref() {
        Some("metric") => UnitSystem::Metric,
        _ => UnitSystem::Imperial,
    };

    let client = WeatherClient::builder()
        .maybe_api_key(api_key_from_env())
        .units(units)
        .build()?;
    let days = client.forecast(&location).await?;

    println!("=================================");
    println!("  {}-day forecast for {}", days.len(), location);
    println!("=================================");
    for day in &days {
        println!("\n{}:", day.date.format("%A (%b %-d)"));
        println!("  Conditions:  {} ({})", day.description, day.condition);
        println!(
            "  Temperature: {}{t} to {}{t}",
            day.temp_min,
            day.temp_max,
            t = units.temperature_label()
        );
        println!("  Humidity:    {}%", day.humidity);
        println!("  Wind:        {} {}", day.wind_speed, units.speed_label());
    }
    Ok(())
}
