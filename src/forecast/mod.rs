//! Forecast aggregation: collapses the raw 3-hour sample feed into one entry
//! per local calendar day and selects the slice the dashboard shows.

pub mod aggregate;

pub use aggregate::{dedup_daily, local_date, outlook, Outlook};
