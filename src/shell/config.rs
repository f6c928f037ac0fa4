use crate::modules::activities::core::seed::{ActivitySeed, DEFAULT_SEED, SeedError, parse_seed};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_PREFIX: &str = "ACTIVITIES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("cannot read seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Runtime settings, read once at startup from `ACTIVITIES_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Falls back to the seed compiled into the binary.
    pub seed_path: Option<PathBuf>,
    /// Used when `RUST_LOG` is unset.
    #[serde(rename = "log")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_path: None,
            log_filter: "info,tower_http=info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Variables missing from `environment` keep their defaults.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize::<Self>()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn load_seed(&self) -> Result<Vec<ActivitySeed>, ConfigError> {
        match &self.seed_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedFile {
                    path: path.clone(),
                    source,
                })?;
                Ok(parse_seed(&json)?)
            }
            None => Ok(parse_seed(DEFAULT_SEED)?),
        }
    }
}
