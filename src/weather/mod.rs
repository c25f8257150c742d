//! Domain model, observable dashboard state and the fetch orchestrator.

pub mod models;
pub mod service;
pub mod state;

pub use models::{AggregateWeather, ConditionInfo, CurrentConditions, DailyForecastEntry, Units};
pub use service::{LookupError, WeatherService};
pub use state::{DashboardState, WeatherStore};
