use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable prefix, e.g. `CADASTRO_DATABASE_URL`.
pub const ENV_PREFIX: &str = "CADASTRO_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    /// Enforced by SQLite itself, so an expired write never commits.
    pub query_timeout_secs: u64,
    /// Request body cap in bytes.
    pub body_limit: usize,
    /// Run the bundled `CREATE TABLE IF NOT EXISTS` on startup.
    pub init_schema: bool,
    /// Echo raw driver messages in error responses instead of a generic one.
    pub expose_db_errors: bool,
    /// Answer every request with 200 and let clients inspect the `error` key.
    pub legacy_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://cadastro.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            query_timeout_secs: 5,
            body_limit: 64 * 1024,
            init_schema: true,
            expose_db_errors: false,
            legacy_status: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with `CADASTRO_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}
