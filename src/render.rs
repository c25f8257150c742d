//! Plain-text rendering of the dashboard panels: current conditions,
//! the two-to-three-day forecast and the wind/humidity details.

use chrono::NaiveDate;

use crate::explain;
use crate::forecast::{self, Outlook};
use crate::weather::{AggregateWeather, DailyForecastEntry, Units};

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a wind direction in degrees
pub fn wind_direction(degrees: u16) -> &'static str {
    let idx = (f64::from(degrees) / 22.5).round() as usize % 16;
    COMPASS[idx]
}

/// Glyph for an OpenWeatherMap icon code. `01*` is clear, `13*` snow,
/// `09*`/`10*`/`11*` the rain family, anything else cloud.
pub fn condition_glyph(icon: &str) -> &'static str {
    if icon.contains("01") {
        "☀"
    } else if icon.contains("13") {
        "❄"
    } else if icon.contains("09") || icon.contains("10") || icon.contains("11") {
        "🌧"
    } else {
        "☁"
    }
}

/// Impression line under the humidity meter
pub fn humidity_impression(humidity: u8) -> &'static str {
    if humidity < 30 {
        "Low humidity – dry air"
    } else if humidity < 60 {
        "Comfortable"
    } else {
        "High humidity – feels muggy"
    }
}

fn humidity_meter(humidity: u8) -> String {
    let filled = usize::from(humidity.min(100)) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

fn rounded(temp: f64) -> i64 {
    temp.round() as i64
}

/// The "today" panel: glyph, temperature, description, date, place and the
/// natural-language summary.
pub fn render_current(weather: &AggregateWeather, units: Units) -> String {
    let current = &weather.current;
    let condition = current.conditions.first();
    let glyph = condition.map(|c| condition_glyph(&c.icon)).unwrap_or("☁");
    let description = condition
        .map(|c| explain::capitalize(&c.description))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "{glyph}  {}{}  {description}\n",
        rounded(current.temp),
        units.temp_symbol()
    ));
    if let Some(date) = forecast::local_date(current.dt, weather.timezone_offset) {
        out.push_str(&format!("Today, {}\n", date.format("%-d %B %Y")));
    }
    if weather.country.is_empty() {
        out.push_str(&format!("{}\n", weather.city_name));
    } else {
        out.push_str(&format!("{}, {}\n", weather.city_name, weather.country));
    }
    out.push('\n');
    out.push_str(&explain::weather_explanation(weather, units));
    out.push('\n');
    out
}

fn forecast_card(entry: &DailyForecastEntry, heading: &str, units: Units) -> String {
    format!(
        "{heading}\n  {glyph}  {desc}  {min}{sym} / {max}{sym}\n",
        glyph = condition_glyph(&entry.condition.icon),
        desc = explain::capitalize(&entry.condition.description),
        min = rounded(entry.temp_min),
        max = rounded(entry.temp_max),
        sym = units.temp_symbol(),
    )
}

/// The forecast panel: a tomorrow card plus up to two following days.
/// `None` when the outlook has insufficient data, which suppresses the
/// panel entirely.
pub fn render_forecast(
    weather: &AggregateWeather,
    units: Units,
    today: NaiveDate,
) -> Option<String> {
    let Outlook {
        tomorrow_date,
        tomorrow,
        upcoming,
    } = forecast::outlook(&weather.daily, weather.timezone_offset, today)?;

    let mut out = forecast_card(
        &tomorrow,
        &format!("Tomorrow ({})", tomorrow_date.format("%-d %B, %A")),
        units,
    );
    for entry in &upcoming {
        let heading = forecast::local_date(entry.dt, weather.timezone_offset)
            .map(|d| d.format("%d %b, %a").to_string())
            .unwrap_or_default();
        out.push_str(&forecast_card(entry, &heading, units));
    }
    Some(out)
}

/// The wind/humidity details panel
pub fn render_details(weather: &AggregateWeather, units: Units) -> String {
    let current = &weather.current;
    format!(
        "Wind Status: {speed} {unit} — {dir} ({deg}°)\n\
         Humidity: {humidity}% {meter} {impression}\n",
        speed = current.wind_speed,
        unit = units.wind_unit(),
        dir = wind_direction(current.wind_deg),
        deg = current.wind_deg,
        humidity = current.humidity,
        meter = humidity_meter(current.humidity),
        impression = humidity_impression(current.humidity),
    )
}

/// Compose the full dashboard. The forecast section disappears when fewer
/// than two daily entries are available.
pub fn render_dashboard(weather: &AggregateWeather, units: Units, today: NaiveDate) -> String {
    let mut out = render_current(weather, units);
    if let Some(forecast_panel) = render_forecast(weather, units, today) {
        out.push('\n');
        out.push_str(&forecast_panel);
    }
    out.push('\n');
    out.push_str(&render_details(weather, units));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{ConditionInfo, CurrentConditions};
    use chrono::NaiveTime;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap())
            .and_utc()
            .timestamp()
    }

    fn entry(dt: i64, min: f64, max: f64) -> DailyForecastEntry {
        DailyForecastEntry {
            dt,
            temp_min: min,
            temp_max: max,
            condition: ConditionInfo {
                icon: "10d".to_string(),
                main: "Rain".to_string(),
                description: "light rain".to_string(),
            },
        }
    }

    fn aggregate(daily: Vec<DailyForecastEntry>) -> AggregateWeather {
        AggregateWeather {
            timezone_offset: 0,
            current: CurrentConditions {
                temp: 21.6,
                conditions: vec![ConditionInfo {
                    icon: "02d".to_string(),
                    main: "Clouds".to_string(),
                    description: "few clouds".to_string(),
                }],
                dt: ts(2025, 3, 10, 12),
                wind_speed: 8.0,
                wind_deg: 140,
                humidity: 55,
            },
            daily,
            city_name: "Nairobi".to_string(),
            country: "KE".to_string(),
        }
    }

    #[test]
    fn test_wind_direction_cardinal_points() {
        assert_eq!(wind_direction(0), "N");
        assert_eq!(wind_direction(90), "E");
        assert_eq!(wind_direction(180), "S");
        assert_eq!(wind_direction(270), "W");
    }

    #[test]
    fn test_wind_direction_rounds_to_nearest_point() {
        assert_eq!(wind_direction(140), "SE");
        assert_eq!(wind_direction(350), "N");
        assert_eq!(wind_direction(12), "NNE");
    }

    #[test]
    fn test_condition_glyphs() {
        assert_eq!(condition_glyph("01d"), "☀");
        assert_eq!(condition_glyph("13n"), "❄");
        assert_eq!(condition_glyph("09d"), "🌧");
        assert_eq!(condition_glyph("10n"), "🌧");
        assert_eq!(condition_glyph("11d"), "🌧");
        assert_eq!(condition_glyph("04d"), "☁");
    }

    #[test]
    fn test_humidity_impressions() {
        assert_eq!(humidity_impression(10), "Low humidity – dry air");
        assert_eq!(humidity_impression(45), "Comfortable");
        assert_eq!(humidity_impression(80), "High humidity – feels muggy");
    }

    #[test]
    fn test_render_current_contents() {
        let out = render_current(&aggregate(Vec::new()), Units::Metric);
        assert!(out.contains("22°C"), "{out}");
        assert!(out.contains("Few clouds"), "{out}");
        assert!(out.contains("Today, 10 March 2025"), "{out}");
        assert!(out.contains("Nairobi, KE"), "{out}");
        assert!(out.contains("a gentle breeze"), "{out}");
    }

    #[test]
    fn test_render_forecast_three_cards() {
        let daily = vec![
            entry(ts(2025, 3, 10, 9), 14.0, 22.0),
            entry(ts(2025, 3, 11, 9), 15.0, 23.0),
            entry(ts(2025, 3, 12, 9), 16.0, 24.0),
            entry(ts(2025, 3, 13, 9), 17.0, 25.0),
        ];
        let out = render_forecast(
            &aggregate(daily),
            Units::Metric,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
        .unwrap();

        assert!(out.contains("Tomorrow (11 March, Tuesday)"), "{out}");
        assert!(out.contains("15°C / 23°C"), "{out}");
        assert!(out.contains("12 Mar, Wed"), "{out}");
        assert!(out.contains("13 Mar, Thu"), "{out}");
    }

    #[test]
    fn test_render_forecast_suppressed_on_insufficient_data() {
        let daily = vec![entry(ts(2025, 3, 11, 9), 15.0, 23.0)];
        let out = render_forecast(
            &aggregate(daily),
            Units::Metric,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );
        assert!(out.is_none());
    }

    #[test]
    fn test_render_details_contents() {
        let out = render_details(&aggregate(Vec::new()), Units::Metric);
        assert!(out.contains("8 km/h"), "{out}");
        assert!(out.contains("SE (140°)"), "{out}");
        assert!(out.contains("55%"), "{out}");
        assert!(out.contains("Comfortable"), "{out}");
    }

    #[test]
    fn test_render_dashboard_omits_forecast_section() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let sparse = render_dashboard(&aggregate(Vec::new()), Units::Metric, today);
        assert!(!sparse.contains("Tomorrow"), "{sparse}");

        let daily = vec![
            entry(ts(2025, 3, 11, 9), 15.0, 23.0),
            entry(ts(2025, 3, 12, 9), 16.0, 24.0),
        ];
        let full = render_dashboard(&aggregate(daily), Units::Metric, today);
        assert!(full.contains("Tomorrow"), "{full}");
        assert!(full.contains("Wind Status"), "{full}");
    }
}
