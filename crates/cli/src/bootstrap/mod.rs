use ferrous_recon_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` wins over `logging.level` when set
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(level = %config.logging.level, "Logging initialized");
}
