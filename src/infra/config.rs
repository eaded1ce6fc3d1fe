//! Centralized configuration (environment variables + defaults).

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Settings the api server reads once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pre-populate the store with the sample accommodations.
    pub seed_sample_data: bool,
}

impl ServerConfig {
    /// Loads `.env` (if any) and reads `HOST`, `PORT` and `SEED_SAMPLE_DATA`.
    pub fn from_env() -> anyhow::Result<Self> {
        load_dotenv();
        Ok(Self {
            host: host(),
            port: port()?,
            seed_sample_data: seed_sample_data()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_sample_data: false,
        }
    }
}

/// Loads `.env` from the working directory. Variables already set in the process win.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Bind host (optional, defaults to all interfaces).
pub fn host() -> String {
    std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

/// Listen port (optional).
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) => parse_port(&v),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Whether to seed sample data (optional, defaults to false).
pub fn seed_sample_data() -> anyhow::Result<bool> {
    match std::env::var("SEED_SAMPLE_DATA") {
        Ok(v) => parse_flag(&v).context("SEED_SAMPLE_DATA must be a boolean"),
        Err(_) => Ok(false),
    }
}

pub fn parse_port(value: &str) -> anyhow::Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .with_context(|| format!("PORT must be a valid u16, got {:?}", value))
}

pub fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value {:?}", other),
    }
}
