use clap::Parser;
use viper_weather::cli::Cli;
use viper_weather::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.load_config()?;
    tracing::debug!(?config, "configuration loaded");
    viper_weather::app::run(config)
}
