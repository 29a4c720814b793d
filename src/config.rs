use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Optional file layer, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `SWIMMER_DATABASE_URL`.
pub const ENV_PREFIX: &str = "SWIMMER_";

pub const DEFAULT_WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    pub wiki_api_url: String,
    pub proxy: Option<String>,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Extra attempts after the first one; only transport errors and 5xx are retried.
    pub fetch_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite:test.db".to_string(),
            loglevel: "info".to_string(),
            wiki_api_url: DEFAULT_WIKI_API_URL.to_string(),
            proxy: None,
            user_agent: concat!("swimmer-registry/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 15,
            fetch_retries: 2,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `SWIMMER_*` variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
