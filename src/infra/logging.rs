use crate::infra::config;
pub use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber.
///
/// `.env` is loaded first, so a `RUST_LOG` set there overrides the default `info` filter.
pub fn init_tracing() -> anyhow::Result<()> {
    config::load_dotenv();
    tracing_subscriber::registry()
        .with(env_filter(EnvFilter::DEFAULT_ENV))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

/// Filter read from the environment variable `var`, or [`DEFAULT_FILTER`] if unset or invalid.
pub fn env_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_comes_from_a_dotenv_file() {
        let path = std::env::temp_dir().join(format!("travel-wish-{}.env", std::process::id()));
        std::fs::write(&path, "TRAVEL_WISH_TEST_LOG=debug\n").unwrap();
        dotenv::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(env_filter("TRAVEL_WISH_TEST_LOG").to_string(), "debug");
    }

    #[test]
    fn unset_variable_falls_back_to_info() {
        assert_eq!(
            env_filter("TRAVEL_WISH_UNSET_LOG_FILTER").to_string(),
            DEFAULT_FILTER
        );
    }
}
