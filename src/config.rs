// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    ANY_ORIGIN, DATABASE_ACQUIRE_TIMEOUT_SECS, DATABASE_MAX_CONNECTIONS, DATABASE_URL, ENV_PREFIX,
    SERVER_HOST, SERVER_PORT,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://feedback.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path_to_str(path.as_ref())?;

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a YAML file with default fallback
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// Load configuration with custom file path and environment variable override
    pub fn load_with_env(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from(config_path, env_source())
    }

    fn load_from(config_path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Add config file source
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        } else {
            // Try default config file names
            builder = builder
                .add_source(File::with_name("config.yaml").required(false))
                .add_source(File::with_name("config.yml").required(false));
        }

        // Environment wins over files
        let config = builder.add_source(env).build()?;
        config.try_deserialize()
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid host `{}`: {e}", self.host)))
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_owned(),
            port: SERVER_PORT,
            log_level: "INFO".to_owned(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DATABASE_URL.to_owned(),
            max_connections: DATABASE_MAX_CONNECTIONS,
            acquire_timeout_secs: DATABASE_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY_ORIGIN.to_owned()],
        }
    }
}

/// `FEEDBACK_PORT=9000`, `FEEDBACK_DATABASE__URL=...`, `FEEDBACK_CORS__ALLOWED_ORIGINS=a,b`
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

fn path_to_str(path: &Path) -> Result<&str, ConfigError> {
    path.to_str().ok_or_else(|| {
        ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
    })
}
