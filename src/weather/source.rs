//! Where the Weather interactor gets its temperature from.

use crate::config::WeatherConfig;
use crate::weather::error::WeatherError;
use async_trait::async_trait;
use std::time::Duration;

/// Provider of the current temperature, in whole degrees.
#[async_trait]
pub trait TemperatureSource: Send + Sync {
    async fn current_temperature(&self) -> Result<i32, WeatherError>;
}

/// Source that waits a fixed latency and reports a fixed value.
#[derive(Debug, Clone)]
pub struct SimulatedTemperature {
    latency: Duration,
    temperature: i32,
    fail: bool,
}

impl SimulatedTemperature {
    pub fn new(latency: Duration, temperature: i32) -> Self {
        Self {
            latency,
            temperature,
            fail: false,
        }
    }

    /// Same latency, but the load ends in [`WeatherError::Unavailable`].
    pub fn failing(latency: Duration) -> Self {
        Self {
            latency,
            temperature: 0,
            fail: true,
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        if config.simulate_failure {
            Self::failing(config.latency())
        } else {
            Self::new(config.latency(), config.temperature)
        }
    }
}

#[async_trait]
impl TemperatureSource for SimulatedTemperature {
    async fn current_temperature(&self) -> Result<i32, WeatherError> {
        tokio::time::sleep(self.latency).await;
        if self.fail {
            return Err(WeatherError::Unavailable {
                reason: "simulated outage".to_string(),
            });
        }
        Ok(self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn reports_value_after_latency() {
        let source = SimulatedTemperature::new(Duration::from_secs(1), 22);
        let started = tokio::time::Instant::now();
        assert_eq!(source.current_temperature().await, Ok(22));
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn from_config_honours_failure_flag() {
        let config = WeatherConfig {
            simulate_failure: true,
            ..WeatherConfig::default()
        };
        let result = SimulatedTemperature::from_config(&config)
            .current_temperature()
            .await;
        assert!(matches!(result, Err(WeatherError::Unavailable { .. })));
    }
}
