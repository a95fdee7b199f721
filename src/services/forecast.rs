use chrono::NaiveDate;
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::WeatherSettings;

/// Errors that can occur when talking to the forecast service
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast service request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Forecast service returned {0}")]
    ApiError(reqwest::StatusCode),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Invalid forecast response: {0}")]
    InvalidResponse(String),
}

/// A geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// One day of live forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub weather_code: Option<u8>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveForecast {
    pub location: GeoLocation,
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeoLocation>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<NaiveDate>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
}

/// Open-Meteo geocoding and daily forecast client
///
/// Geocoding results are cached in memory; forecasts are always fetched.
/// Failures are returned as-is, there are no retries.
pub struct OpenMeteoClient {
    geocoding_url: String,
    forecast_url: String,
    client: Client,
    locations: Cache<String, GeoLocation>,
}

impl OpenMeteoClient {
    /// Create a new client
    pub fn new(
        geocoding_url: String,
        forecast_url: String,
        timeout: Duration,
        cache_size: u64,
        cache_ttl: Duration,
    ) -> Result<Self, ForecastError> {
        let client = Client::builder().timeout(timeout).build()?;

        let locations = moka::future::CacheBuilder::new(cache_size)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            geocoding_url,
            forecast_url,
            client,
            locations,
        })
    }

    pub fn from_settings(settings: &WeatherSettings) -> Result<Self, ForecastError> {
        Self::new(
            settings.geocoding_url.clone(),
            settings.forecast_url.clone(),
            Duration::from_secs(settings.timeout_secs),
            settings.cache_size,
            Duration::from_secs(settings.cache_ttl_secs),
        )
    }

    /// Resolve a place name to coordinates
    pub async fn geocode(&self, name: &str) -> Result<GeoLocation, ForecastError> {
        let key = name.trim().to_lowercase();
        if let Some(location) = self.locations.get(&key).await {
            tracing::trace!("Geocode cache hit: {}", key);
            return Ok(location);
        }

        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.geocoding_url.trim_end_matches('/'),
            urlencoding::encode(name.trim())
        );

        tracing::debug!("Geocoding {}", name);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ForecastError::ApiError(response.status()));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::InvalidResponse(e.to_string()))?;

        let location = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ForecastError::LocationNotFound(name.to_string()))?;

        self.locations.insert(key, location.clone()).await;
        Ok(location)
    }

    /// Daily forecast for a location
    pub async fn forecast(
        &self,
        location: &GeoLocation,
        days: u8,
    ) -> Result<Vec<ForecastDay>, ForecastError> {
        let url = format!(
            "{}?latitude={}&longitude={}&daily=weather_code,temperature_2m_max,temperature_2m_min&timezone=auto&forecast_days={}",
            self.forecast_url.trim_end_matches('/'),
            location.latitude,
            location.longitude,
            days
        );

        tracing::debug!("Fetching {}-day forecast for {}", days, location.name);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ForecastError::ApiError(response.status()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::InvalidResponse(e.to_string()))?;

        Ok(into_days(body.daily))
    }

    /// Geocode a destination and fetch its forecast
    pub async fn forecast_for(
        &self,
        destination: &str,
        days: u8,
    ) -> Result<LiveForecast, ForecastError> {
        let location = self.geocode(destination).await?;
        let days = self.forecast(&location, days).await?;
        Ok(LiveForecast { location, days })
    }
}

impl std::fmt::Debug for OpenMeteoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoClient")
            .field("geocoding_url", &self.geocoding_url)
            .field("forecast_url", &self.forecast_url)
            .field("cached_locations", &self.locations.entry_count())
            .finish()
    }
}

fn into_days(series: DailySeries) -> Vec<ForecastDay> {
    series
        .time
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let weather_code = series.weather_code.get(i).copied().flatten();
            ForecastDay {
                date,
                temperature_max: series.temperature_2m_max.get(i).copied().flatten(),
                temperature_min: series.temperature_2m_min.get(i).copied().flatten(),
                weather_code,
                description: weather_code.map_or("Unknown", describe_weather_code),
            }
        })
        .collect()
}

/// Human description of a WMO weather interpretation code
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
        71 | 73 | 75 | 77 => "Snow",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> OpenMeteoClient {
        OpenMeteoClient::new(
            format!("{}/v1/search", server.url()),
            format!("{}/v1/forecast", server.url()),
            Duration::from_secs(5),
            100,
            Duration::from_secs(60),
        )
        .unwrap()
    }

    const PARIS_GEOCODE: &str = r#"{
        "results": [
            {"name": "Paris", "latitude": 48.85341, "longitude": 2.3488,
             "timezone": "Europe/Paris", "country": "France"}
        ]
    }"#;

    #[tokio::test]
    async fn test_geocode_success_is_cached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/search")
            .match_query(Matcher::UrlEncoded("name".into(), "Paris".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PARIS_GEOCODE)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let first = client.geocode("Paris").await.unwrap();
        let second = client.geocode("paris").await.unwrap();

        assert_eq!(first.country.as_deref(), Some("France"));
        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_geocode_no_results() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"generationtime_ms": 0.5}"#)
            .create_async()
            .await;

        let err = client_for(&server).geocode("Atlantis").await.unwrap_err();
        assert!(matches!(err, ForecastError::LocationNotFound(name) if name == "Atlantis"));
    }

    #[tokio::test]
    async fn test_forecast_parses_daily_series() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::UrlEncoded("forecast_days".into(), "2".into()))
            .with_status(200)
            .with_body(
                r#"{"daily": {
                    "time": ["2025-06-01", "2025-06-02"],
                    "weather_code": [61, null],
                    "temperature_2m_max": [21.4, 23.0],
                    "temperature_2m_min": [12.1, 13.5]
                }}"#,
            )
            .create_async()
            .await;

        let location: GeoLocation = serde_json::from_str(
            r#"{"name": "Paris", "latitude": 48.85, "longitude": 2.35}"#,
        )
        .unwrap();
        let days = client_for(&server).forecast(&location, 2).await.unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].description, "Rain");
        assert_eq!(days[0].temperature_max, Some(21.4));
        assert_eq!(days[1].weather_code, None);
        assert_eq!(days[1].description, "Unknown");
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server).forecast_for("Paris", 3).await.unwrap_err();
        assert!(matches!(err, ForecastError::ApiError(status) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server).geocode("Paris").await.unwrap_err();
        assert!(matches!(err, ForecastError::InvalidResponse(_)));
    }

    #[test]
    fn test_weather_code_descriptions() {
        assert_eq!(describe_weather_code(0), "Clear sky");
        assert_eq!(describe_weather_code(81), "Rain showers");
        assert_eq!(describe_weather_code(42), "Unknown");
    }
}
