//! skycast: a terminal weather dashboard backed by OpenWeatherMap.
//!
//! The library holds all of the logic; the `skycast` binary is a thin
//! interactive loop over it. A lookup geocodes a city name, fetches current
//! conditions and the 5-day/3-hour forecast, collapses the forecast into
//! per-day entries and publishes the result through a single-writer
//! observable state container.

pub mod config;
pub mod explain;
pub mod forecast;
pub mod owm;
pub mod render;
pub mod weather;

pub use config::AppConfig;
pub use weather::{AggregateWeather, DashboardState, Units, WeatherService};
