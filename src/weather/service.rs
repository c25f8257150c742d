use thiserror::Error;
use tokio::sync::watch;

use super::models::{AggregateWeather, ConditionInfo, CurrentConditions, Units};
use super::state::{DashboardState, WeatherStore};
use crate::forecast;
use crate::owm::{ApiError, OwmClient};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("City not found!")]
    CityNotFound,

    #[error("Weather info missing!")]
    WeatherMissing,

    #[error("Forecast data missing!")]
    ForecastMissing,

    #[error("{0}")]
    Upstream(ApiError),
}

/// Decode failures mean the endpoint's response was absent or malformed and
/// take the step-specific error; everything else propagates with its native
/// message text.
fn classify(err: ApiError, missing: LookupError) -> LookupError {
    match err {
        ApiError::Decode(_) => missing,
        other => LookupError::Upstream(other),
    }
}

/// The fetch orchestrator: sequences geocode, current conditions and the
/// forecast, and publishes the merged result through the [`WeatherStore`].
pub struct WeatherService {
    api: OwmClient,
    store: WeatherStore,
}

impl WeatherService {
    pub fn new(api: OwmClient) -> Self {
        Self {
            api,
            store: WeatherStore::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.store.subscribe()
    }

    pub fn state(&self) -> DashboardState {
        self.store.snapshot()
    }

    /// Look up a city and publish the result.
    ///
    /// The three upstream calls run strictly in sequence with early exit on
    /// the first failure. On failure the published aggregate is cleared and
    /// the error message set; on success the aggregate is replaced wholesale.
    ///
    /// Known limitation: starting a lookup does not cancel one already in
    /// flight. When two overlap, whichever completes last determines the
    /// published state, regardless of start order.
    pub async fn lookup(
        &self,
        city: &str,
        units: Units,
    ) -> Result<AggregateWeather, LookupError> {
        tracing::info!(city = %city, units = %units, "Starting weather lookup");
        self.store.begin_lookup();

        match self.fetch(city, units).await {
            Ok(weather) => {
                tracing::info!(
                    city = %weather.city_name,
                    temp = %weather.current.temp,
                    days = weather.daily.len(),
                    "Weather lookup succeeded"
                );
                self.store.apply_success(weather.clone());
                Ok(weather)
            }
            Err(e) => {
                tracing::warn!(city = %city, error = %e, "Weather lookup failed");
                self.store.apply_failure(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self, city: &str, units: Units) -> Result<AggregateWeather, LookupError> {
        // 1. Resolve the city name to coordinates
        let geo = self
            .api
            .geocode(city)
            .await
            .map_err(LookupError::Upstream)?
            .into_iter()
            .next()
            .ok_or(LookupError::CityNotFound)?;

        // 2. Current conditions at the resolved coordinates
        let current = self
            .api
            .current_weather(geo.lat, geo.lon, units)
            .await
            .map_err(|e| classify(e, LookupError::WeatherMissing))?;

        let conditions: Vec<ConditionInfo> = current
            .weather
            .iter()
            .map(|w| ConditionInfo {
                icon: w.icon.clone(),
                main: w.main.clone(),
                description: w.description.clone(),
            })
            .collect();
        if conditions.is_empty() {
            return Err(LookupError::WeatherMissing);
        }

        // 3. 5-day / 3-hour forecast at the same coordinates
        let raw_forecast = self
            .api
            .forecast(geo.lat, geo.lon, units)
            .await
            .map_err(|e| classify(e, LookupError::ForecastMissing))?;

        // 4. Collapse the sample feed and assemble the aggregate
        let daily = forecast::dedup_daily(&raw_forecast.list, current.timezone);

        Ok(AggregateWeather {
            timezone_offset: current.timezone,
            current: CurrentConditions {
                temp: current.main.temp,
                conditions,
                dt: current.dt,
                wind_speed: current.wind.speed,
                wind_deg: current.wind.deg.unwrap_or(0),
                humidity: current.main.humidity,
            },
            daily,
            city_name: geo.name,
            country: geo.country,
        })
    }
}
