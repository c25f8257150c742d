use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;

use crate::owm::ForecastSample;
use crate::weather::DailyForecastEntry;

/// Calendar date of a timestamp in the city's local time, derived by shifting
/// the epoch by the UTC offset. `None` only for out-of-range timestamps.
pub fn local_date(dt: i64, tz_offset: i32) -> Option<NaiveDate> {
    DateTime::from_timestamp(dt + i64::from(tz_offset), 0).map(|t| t.date_naive())
}

/// Collapse the raw 3-hour sample list into one entry per local calendar day.
///
/// One pass, order preserving: the first sample encountered for a day stands
/// in for the whole day (its min/max and condition are carried as-is, not
/// averaged across the day's samples). Samples without a condition entry or
/// with an unrepresentable timestamp are skipped.
pub fn dedup_daily(samples: &[ForecastSample], tz_offset: i32) -> Vec<DailyForecastEntry> {
    let mut by_day: IndexMap<NaiveDate, DailyForecastEntry> = IndexMap::new();

    for sample in samples {
        let Some(date) = local_date(sample.dt, tz_offset) else {
            continue;
        };
        let Some(condition) = sample.weather.first() else {
            continue;
        };
        by_day.entry(date).or_insert_with(|| DailyForecastEntry {
            dt: sample.dt,
            temp_min: sample.main.temp_min,
            temp_max: sample.main.temp_max,
            condition: crate::weather::ConditionInfo {
                icon: condition.icon.clone(),
                main: condition.main.clone(),
                description: condition.description.clone(),
            },
        });
    }

    by_day.into_values().collect()
}

/// The slice of the daily list the dashboard renders: tomorrow plus up to
/// two following days.
#[derive(Debug, Clone, PartialEq)]
pub struct Outlook {
    pub tomorrow_date: NaiveDate,
    pub tomorrow: DailyForecastEntry,
    /// Ascending by timestamp, at most two entries
    pub upcoming: Vec<DailyForecastEntry>,
}

/// Select tomorrow and the two days after it from the deduped daily list.
///
/// Tomorrow is the entry whose local date equals `today + 1`; when no exact
/// match exists the second daily entry stands in (a fallback, not an error).
/// Returns `None` when fewer than two daily entries exist, which suppresses
/// all forecast rendering.
pub fn outlook(daily: &[DailyForecastEntry], tz_offset: i32, today: NaiveDate) -> Option<Outlook> {
    if daily.len() < 2 {
        return None;
    }

    let tomorrow_date = today.succ_opt()?;
    let tomorrow = daily
        .iter()
        .find(|d| local_date(d.dt, tz_offset) == Some(tomorrow_date))
        .unwrap_or(&daily[1])
        .clone();

    let mut upcoming: Vec<DailyForecastEntry> = daily
        .iter()
        .filter(|d| matches!(local_date(d.dt, tz_offset), Some(date) if date > tomorrow_date))
        .cloned()
        .collect();
    upcoming.sort_by_key(|d| d.dt);
    upcoming.truncate(2);

    Some(Outlook {
        tomorrow_date,
        tomorrow,
        upcoming,
    })
}
