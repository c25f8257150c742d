use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::weather::Units;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key
    pub openweathermap_api_key: String,

    /// City fetched on startup before the first search
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Unit system: metric or imperial
    #[serde(default)]
    pub units: Units,
}

fn default_city() -> String {
    "Nairobi".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("default_city", default_city())?
            .set_default("units", "metric")?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with SKYCAST_)
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("SKYCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
