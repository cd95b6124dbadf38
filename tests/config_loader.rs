mod common;

use common::temp_config;
use viper_weather::config::{Config, ConfigError, UiConfig, WeatherConfig};

/// Config::default() matches the documented defaults.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.weather.temperature, 22);
    assert_eq!(config.weather.latency_ms, 1000);
    assert_eq!(config.weather.timeout_ms, 5000);
    assert!(!config.weather.simulate_failure);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("viper-weather/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"[weather]
temperature = -3
simulate_failure = true
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.weather.temperature, -3);
    assert!(config.weather.simulate_failure);
    assert_eq!(config.weather.latency_ms, 1000);
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_full_file_round_trips_durations() {
    let (_dir, path) = temp_config(
        r#"[weather]
temperature = 30
latency_ms = 250
timeout_ms = 750

[ui]
tick_rate_ms = 40
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.weather.latency().as_millis(), 250);
    assert_eq!(config.weather.timeout().as_millis(), 750);
    assert_eq!(config.ui.tick_rate().as_millis(), 40);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[weather\ntemperature = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let config = Config {
        weather: WeatherConfig {
            timeout_ms: 0,
            ..WeatherConfig::default()
        },
        ui: UiConfig::default(),
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("timeout_ms"));
}

#[test]
fn test_zero_tick_rate_in_file_fails_load() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}
