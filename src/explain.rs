//! Natural-language summary of current conditions. Pure functions: same
//! inputs, same sentence; all thresholds are fixed qualitative bands.

use crate::weather::{AggregateWeather, Units};

/// Qualitative wind label. The numeric thresholds are shared between unit
/// systems even though km/h and mph differ in scale (observed behavior of
/// the bands, kept deliberately; see DESIGN.md).
pub fn wind_description(speed: f64) -> &'static str {
    if speed < 1.0 {
        "calm"
    } else if speed < 10.0 {
        "a gentle breeze"
    } else if speed < 20.0 {
        "a moderate wind"
    } else if speed < 30.0 {
        "strong winds"
    } else {
        "very strong winds"
    }
}

/// Qualitative temperature label; bands depend on the unit system
pub fn temp_description(temp: f64, units: Units) -> &'static str {
    match units {
        Units::Imperial => {
            if temp < 45.0 {
                "cold"
            } else if temp < 70.0 {
                "mild"
            } else if temp < 85.0 {
                "warm"
            } else {
                "hot"
            }
        }
        Units::Metric => {
            if temp < 10.0 {
                "cold"
            } else if temp < 20.0 {
                "mild"
            } else if temp < 28.0 {
                "warm"
            } else {
                "hot"
            }
        }
    }
}

/// Qualitative humidity label from a 0-100 percentage
pub fn humidity_description(humidity: u8) -> &'static str {
    if humidity < 40 {
        "air feels dry"
    } else if humidity < 70 {
        "comfortable humidity"
    } else {
        "rather humid"
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compose the three-sentence weather summary shown under the current panel.
pub fn weather_explanation(weather: &AggregateWeather, units: Units) -> String {
    let current = &weather.current;
    let desc = capitalize(
        current
            .conditions
            .first()
            .map(|c| c.description.as_str())
            .unwrap_or("weather"),
    );
    let place = if weather.country.is_empty() {
        weather.city_name.clone()
    } else {
        format!("{}, {}", weather.city_name, weather.country)
    };
    let degree = match units {
        Units::Metric => "C",
        Units::Imperial => "F",
    };

    format!(
        "{desc} in {place}. It's currently {temp}°{degree}, which feels {feel}. \
         There is {wind}, with humidity at {humidity}%, making the {humid}.",
        temp = current.temp.round() as i64,
        feel = temp_description(current.temp, units),
        wind = wind_description(current.wind_speed),
        humidity = current.humidity,
        humid = humidity_description(current.humidity),
    )
}
