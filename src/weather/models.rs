use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system passed through to OpenWeatherMap. The upstream API returns
/// pre-converted values, so changing the system means re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Query-parameter value expected by the API
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn temp_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    pub fn wind_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            other => Err(format!("unknown unit system: {other}")),
        }
    }
}

/// One weather condition entry (icon code, category, description)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionInfo {
    pub icon: String,
    pub main: String,
    pub description: String,
}

/// Current observed conditions at the resolved coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in the requested unit system
    pub temp: f64,
    /// Non-empty, ordered; the first entry drives display
    pub conditions: Vec<ConditionInfo>,
    /// Observation timestamp, seconds since epoch
    pub dt: i64,
    pub wind_speed: f64,
    /// Wind direction in degrees, 0 = north
    pub wind_deg: u16,
    /// Relative humidity, 0-100
    pub humidity: u8,
}

/// One representative forecast sample standing in for a calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Timestamp of the sample chosen for this day, seconds since epoch
    pub dt: i64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// The first sample's condition for that day, not an aggregate
    pub condition: ConditionInfo,
}

/// The dashboard's single source of truth: merged current conditions and
/// per-day forecast for one resolved city. Replaced wholesale on every
/// successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateWeather {
    /// City UTC offset in seconds, from the current-conditions response
    pub timezone_offset: i32,
    pub current: CurrentConditions,
    /// First-seen order from the raw feed, one entry per day
    pub daily: Vec<DailyForecastEntry>,
    /// City name as resolved by geocoding, not as typed
    pub city_name: String,
    pub country: String,
}
