//! OpenWeatherMap API boundary: raw response models and the HTTP client.
//! The rest of the crate works on the domain types in [`crate::weather`].

pub mod client;
pub mod models;

pub use client::{ApiError, OwmClient};
pub use models::{CurrentResponse, ForecastResponse, ForecastSample, GeoLocation};
