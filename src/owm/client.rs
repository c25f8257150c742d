use reqwest::Client;
use thiserror::Error;

use super::models::{CurrentResponse, ForecastResponse, GeoLocation, OwmErrorBody};
use crate::weather::Units;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const GEOCODING_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin client over the three OpenWeatherMap endpoints the dashboard needs.
/// Holds a shared pooled `reqwest::Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OwmClient {
    pub fn new(client: Client, api_key: &str) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, e.g. a mock server in tests
    pub fn with_base_url(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a city name to coordinates. The API returns a list; an empty
    /// list means the city did not resolve, which the caller classifies.
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoLocation>, ApiError> {
        tracing::debug!(city = %city, "Geocoding city");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, GEOCODING_PATH))
            .query(&[("q", city), ("limit", "1"), ("appid", &self.api_key)])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetch current conditions at the given coordinates
    pub async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<CurrentResponse, ApiError> {
        tracing::debug!(lat = %lat, lon = %lon, units = %units, "Fetching current conditions");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, CURRENT_PATH))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", units.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetch the 5-day / 3-hour forecast at the given coordinates
    pub async fn forecast(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<ForecastResponse, ApiError> {
        tracing::debug!(lat = %lat, lon = %lon, units = %units, "Fetching forecast");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, FORECAST_PATH))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", units.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Map non-success statuses to `ApiError::Api` using the upstream
    /// `{"message": ...}` body where available
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        tracing::debug!(status = %status, "Received API response");

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<OwmErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {status}"),
        };
        Err(ApiError::Api(message))
    }
}
