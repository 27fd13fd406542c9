use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::database::{seed, ActivityDirectory, SeedError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Reads HOST, PORT, STATIC_DIR and ACTIVITIES_SEED_FILE.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(port = %raw, "invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_file: lookup("ACTIVITIES_SEED_FILE")
                .filter(|f| !f.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, port).parse()
    }

    pub fn build_directory(&self) -> Result<ActivityDirectory, SeedError> {
        match &self.seed_file {
            Some(path) => Ok(ActivityDirectory::new(seed::load_from_file(path)?)),
            None => Ok(ActivityDirectory::seeded()),
        }
    }
}
