use serde::Deserialize;

// ============================================================================
// Geocoding API response (geo/1.0/direct)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub state: Option<String>,
}

// ============================================================================
// Current weather response (data/2.5/weather)
// Only the fields the dashboard consumes are deserialized
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub dt: i64,
    pub main: MainInfo,
    pub weather: Vec<WeatherInfo>,
    pub wind: WindInfo,
    /// City UTC offset in seconds
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Debug, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherInfo {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
    /// Absent in some station reports; the dashboard treats missing as north
    pub deg: Option<u16>,
}

// ============================================================================
// 5-day / 3-hour forecast response (data/2.5/forecast)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastSample>,
}

/// One 3-hour forecast sample from the raw feed
#[derive(Debug, Deserialize)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: SampleMain,
    pub weather: Vec<WeatherInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SampleMain {
    pub temp_min: f64,
    pub temp_max: f64,
}

/// Error body shape returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
pub struct OwmErrorBody {
    pub message: String,
}
