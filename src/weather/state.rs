use tokio::sync::watch;

use super::models::AggregateWeather;

/// Everything an observer of the dashboard can see. Published as whole
/// snapshots: there is never a partially updated record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// A lookup is in flight
    pub loading: bool,
    /// Last successful aggregate, absent before the first success and after
    /// any failure
    pub weather: Option<AggregateWeather>,
    /// Display text of the last failure, cleared when a lookup starts
    pub error: Option<String>,
}

/// Single-writer state container for the dashboard, built on a watch
/// channel. The orchestrator is the only writer; observers subscribe and
/// receive change notifications.
#[derive(Debug)]
pub struct WeatherStore {
    tx: watch::Sender<DashboardState>,
}

impl WeatherStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DashboardState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.tx.borrow().clone()
    }

    /// A lookup started: flag it and clear the previous error. The previous
    /// aggregate stays visible until the lookup resolves.
    pub(crate) fn begin_lookup(&self) {
        self.tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// A lookup succeeded: replace the aggregate wholesale.
    pub(crate) fn apply_success(&self, weather: AggregateWeather) {
        self.tx.send_modify(|state| {
            state.loading = false;
            state.weather = Some(weather);
            state.error = None;
        });
    }

    /// A lookup failed: clear the aggregate entirely so no stale data is
    /// shown, and surface the message.
    pub(crate) fn apply_failure(&self, message: String) {
        self.tx.send_modify(|state| {
            state.loading = false;
            state.weather = None;
            state.error = Some(message);
        });
    }
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}
