use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Weather screen built on the VIPER template.
#[derive(Debug, Parser)]
#[command(name = "viper-weather", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated load latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Temperature the simulated source reports
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<i32>,

    /// Make the load fail to exercise the error state
    #[arg(long)]
    pub fail: bool,
}

impl Cli {
    /// Load the config file, then apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(latency_ms) = self.latency_ms {
            config.weather.latency_ms = latency_ms;
        }
        if let Some(temperature) = self.temperature {
            config.weather.temperature = temperature;
        }
        if self.fail {
            config.weather.simulate_failure = true;
        }
    }
}
