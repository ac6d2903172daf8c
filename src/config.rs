//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend API base handed to the UI. Logged only; nothing calls it yet.
    pub api_base: Option<String>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VIZAI_API_BASE`: trimmed, trailing `/` removed, blank means unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var(client::config::API_BASE_VAR).ok().as_deref(),
        )
    }

    /// `from_env` with the raw values passed in.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `port` is not a `u16`.
    pub fn from_vars(port: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(port)?,
            api_base: client::config::normalize_api_base(api_base),
        })
    }

    /// Listen on every interface. `HOST` is not read; shells commonly
    /// export it as the machine name.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
