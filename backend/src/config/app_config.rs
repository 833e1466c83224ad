use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("HOST/PORT do not form a socket address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: Option<String>, // restricts CORS to this origin when set
    pub static_dir: Option<PathBuf>,  // built frontend (trunk dist) to serve
    pub admin_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            frontend_url: None,
            static_dir: None,
            admin_token: "mock-token".to_string(),
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Config {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            frontend_url: non_empty("FRONTEND_URL"),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            admin_token: non_empty("ADMIN_TOKEN").unwrap_or(defaults.admin_token),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_localhost_3000() {
        let config = Config::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.admin_token, "mock-token");
    }

    #[test]
    fn hostname_is_not_a_socket_address() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidAddress(_))));
    }
}
