//! Business logic of the Weather screen.

use crate::weather::error::WeatherError;
use crate::weather::presenter::PresenterHandle;
use crate::weather::source::TemperatureSource;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Operations the presenter may invoke on the interactor.
#[async_trait]
pub trait WeatherInteractorInput: Send + Sync {
    /// Load the current temperature and report back through the presenter.
    async fn on_appear(&self);
}

/// Loads the temperature and reports it to the presenter.
///
/// Calls are serialized: a second `on_appear` waits until the first one has
/// reported back.
pub struct WeatherInteractor {
    presenter: PresenterHandle,
    source: Arc<dyn TemperatureSource>,
    timeout: Duration,
    turn: Mutex<()>,
}

impl WeatherInteractor {
    pub fn new(
        presenter: PresenterHandle,
        source: Arc<dyn TemperatureSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            presenter,
            source,
            timeout,
            turn: Mutex::new(()),
        }
    }
}

#[async_trait]
impl WeatherInteractorInput for WeatherInteractor {
    async fn on_appear(&self) {
        let _turn = self.turn.lock().await;

        let result = tokio::time::timeout(self.timeout, self.source.current_temperature())
            .await
            .unwrap_or(Err(WeatherError::Timeout(self.timeout)));

        match result {
            Ok(temperature) => {
                tracing::debug!(temperature, "temperature loaded");
                self.presenter.did_load_temperature(temperature);
            }
            Err(error) => {
                tracing::warn!(%error, "temperature load failed");
                self.presenter.did_fail(error);
            }
        }
    }
}
