//! Display lifecycle of the weather widget.
//!
//! The widget owns a three-state lifecycle: it mounts in `Loading`,
//! issues exactly one fetch for the fixed location, and ends up in
//! either `Ready` or `Error`. There are no further transitions, no
//! refresh and no retry.

use log::{debug, warn};

use crate::{
    model::{PLAZA_INDONESIA, WeatherObservation},
    provider::{FetchError, WeatherProvider},
};

/// What the display should show right now.
///
/// Transitions are one-directional: `Loading` moves to `Ready` or
/// `Error` once, and both of those are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Loading,
    Error,
    Ready(WeatherObservation),
}

/// The weather display widget: owns the display state and the single
/// fetch that feeds it.
#[derive(Debug)]
pub struct WeatherWidget<P> {
    provider: P,
    state: DisplayState,
    fetch_issued: bool,
    mounted: bool,
}

impl<P: WeatherProvider> WeatherWidget<P> {
    /// Mount the widget in `Loading`. Nothing is fetched yet; call
    /// [`WeatherWidget::load`] to drive the lifecycle to completion.
    pub fn mount(provider: P) -> Self {
        Self {
            provider,
            state: DisplayState::Loading,
            fetch_issued: false,
            mounted: true,
        }
    }

    /// Issue the widget's one fetch and apply the outcome.
    ///
    /// Calling this again (or after unmount) is a no-op; the widget
    /// never fetches twice.
    pub async fn load(&mut self) {
        if self.fetch_issued || !self.mounted {
            return;
        }
        self.fetch_issued = true;

        let result = self.provider.fetch_current(PLAZA_INDONESIA).await;
        self.apply_fetch_result(result);
    }

    /// Completion handler for the fetch.
    ///
    /// Public so a host driving the fetch on its own task can feed the
    /// result back in. Ignored when the widget was unmounted mid-fetch
    /// or has already left `Loading`.
    pub fn apply_fetch_result(&mut self, result: Result<WeatherObservation, FetchError>) {
        if !self.mounted {
            debug!("fetch completed after unmount, dropping result");
            return;
        }
        if self.state != DisplayState::Loading {
            return;
        }

        match result {
            Ok(observation) => self.state = DisplayState::Ready(observation),
            Err(cause) => {
                warn!("weather fetch failed: {cause}");
                self.state = DisplayState::Error;
            }
        }
    }

    /// Tear the widget down; any in-flight fetch result is discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::WeatherCode;
    use crate::model::Coordinates;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature_c: 31.2,
            wind_speed_kmh: 10.5,
            code: WeatherCode::Thunderstorm,
            observed_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .expect("valid date")
                .and_hms_opt(14, 30, 0)
                .expect("valid time"),
            timezone: "Asia/Jakarta".to_string(),
        }
    }

    /// Provider stub that counts calls, records the requested
    /// coordinate and either succeeds with the fixture observation or
    /// fails.
    #[derive(Debug)]
    struct ScriptedProvider {
        fail: bool,
        calls: AtomicUsize,
        requested: Mutex<Option<Coordinates>>,
    }

    impl ScriptedProvider {
        fn succeeding() -> Self {
            Self { fail: false, calls: AtomicUsize::new(0), requested: Mutex::new(None) }
        }

        fn failing() -> Self {
            Self { fail: true, calls: AtomicUsize::new(0), requested: Mutex::new(None) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn requested(&self) -> Option<Coordinates> {
            *self.requested.lock().expect("lock is never poisoned")
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn fetch_current(
            &self,
            location: Coordinates,
        ) -> Result<WeatherObservation, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.requested.lock().expect("lock is never poisoned") = Some(location);
            if self.fail {
                Err(FetchError::MissingCurrentWeather)
            } else {
                Ok(observation())
            }
        }
    }

    #[tokio::test]
    async fn successful_load_reaches_ready() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        assert_eq!(*widget.state(), DisplayState::Loading);

        widget.load().await;
        assert_eq!(*widget.state(), DisplayState::Ready(observation()));
    }

    #[tokio::test]
    async fn failed_load_reaches_error() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::failing());
        widget.load().await;
        assert_eq!(*widget.state(), DisplayState::Error);
    }

    #[tokio::test]
    async fn load_fetches_the_fixed_location() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        widget.load().await;
        assert_eq!(widget.provider.requested(), Some(PLAZA_INDONESIA));
    }

    #[tokio::test]
    async fn load_issues_exactly_one_fetch() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        widget.load().await;
        widget.load().await;
        widget.load().await;
        assert_eq!(widget.provider.calls(), 1);
    }

    #[tokio::test]
    async fn load_after_unmount_does_not_fetch() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        widget.unmount();
        widget.load().await;
        assert_eq!(widget.provider.calls(), 0);
        assert_eq!(*widget.state(), DisplayState::Loading);
    }

    #[test]
    fn result_after_unmount_is_dropped() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        widget.unmount();
        widget.apply_fetch_result(Ok(observation()));
        assert_eq!(*widget.state(), DisplayState::Loading);
    }

    #[test]
    fn terminal_states_ignore_late_results() {
        let mut widget = WeatherWidget::mount(ScriptedProvider::succeeding());
        widget.apply_fetch_result(Err(FetchError::MissingCurrentWeather));
        assert_eq!(*widget.state(), DisplayState::Error);

        widget.apply_fetch_result(Ok(observation()));
        assert_eq!(*widget.state(), DisplayState::Error);
    }
}
