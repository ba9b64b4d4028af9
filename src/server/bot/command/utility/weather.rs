use serde::Deserialize;
use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed},
    async_trait,
};
use std::time::Duration;

use crate::server::{
    bot::{
        command::EMBED_COLOR,
        interaction::{
            context::HandlerContext,
            handler::{CommandHandler, HandlerMeta},
            request::{CommandRequest, HandlerKind},
            response::Response,
        },
    },
    error::command::CommandError,
};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const CITY_MAX_LENGTH: usize = 100;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub weather_code: u8,
}

/// WMO weather interpretation code as Open-Meteo reports it.
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

pub fn check_city(city: &str) -> Result<&str, CommandError> {
    let city = city.trim();
    if city.is_empty() || city.chars().count() > CITY_MAX_LENGTH {
        return Err(CommandError::user(format!(
            "City names are 1 to {} characters long.",
            CITY_MAX_LENGTH
        )));
    }
    Ok(city)
}

pub fn weather_embed(place: &Place, weather: &CurrentWeather) -> CreateEmbed {
    let title = match &place.country {
        Some(country) => format!("{}, {}", place.name, country),
        None => place.name.clone(),
    };

    CreateEmbed::new()
        .title(title)
        .description(describe_weather_code(weather.weather_code))
        .field("Temperature", format!("{:.1} °C", weather.temperature_2m), true)
        .field("Humidity", format!("{:.0}%", weather.relative_humidity_2m), true)
        .field("Wind", format!("{:.1} km/h", weather.wind_speed_10m), true)
        .color(EMBED_COLOR)
}

pub struct WeatherCommand {
    meta: HandlerMeta,
}

impl WeatherCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput).cooldown(Duration::from_secs(10)),
        }
    }
}

#[async_trait]
impl CommandHandler for WeatherCommand {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Current weather in a city"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "city", "City name")
                    .max_length(CITY_MAX_LENGTH as u16)
                    .required(true),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let city = check_city(request.string("city").unwrap_or_default())?;

        let geocoding: GeocodingResponse = ctx
            .http_client
            .get(GEOCODING_URL)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let place = geocoding
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CommandError::user(format!("Couldn't find a city named '{}'.", city)))?;

        let forecast: ForecastResponse = ctx
            .http_client
            .get(FORECAST_URL)
            .query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code".to_string(),
                ),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Response::embed(weather_embed(&place, &forecast.current)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_codes() {
        assert_eq!(describe_weather_code(0), "Clear sky");
        assert_eq!(describe_weather_code(81), "Rain showers");
        assert_eq!(describe_weather_code(99), "Thunderstorm with hail");
        assert_eq!(describe_weather_code(42), "Unknown");
    }

    #[test]
    fn rejects_blank_and_long_cities() {
        assert!(check_city("   ").is_err());
        assert!(check_city(&"a".repeat(101)).is_err());
        assert_eq!(check_city("  Oslo ").unwrap(), "Oslo");
    }

    #[test]
    fn parses_geocoding_without_results() {
        let parsed: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn parses_current_weather() {
        let json = r#"{"current":{"time":"2026-01-01T12:00","temperature_2m":-3.4,
            "relative_humidity_2m":81,"wind_speed_10m":12.2,"weather_code":71}}"#;
        let parsed: ForecastResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.current.weather_code, 71);
        assert_eq!(parsed.current.relative_humidity_2m, 81.0);
    }
}
