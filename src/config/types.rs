use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the Weather feature's simulated data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature reported by the simulated source (default: 22).
    #[serde(default = "default_temperature")]
    pub temperature: i32,
    /// Simulated network latency in milliseconds (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Load timeout in milliseconds (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Make the simulated source fail instead of reporting a value.
    #[serde(default)]
    pub simulate_failure: bool,
}

/// Terminal loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds, drives the loading spinner (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl WeatherConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            latency_ms: default_latency_ms(),
            timeout_ms: default_timeout_ms(),
            simulate_failure: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_temperature() -> i32 {
    22
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_tick_rate_ms() -> u64 {
    100
}
