// ABOUTME: Environment-driven server configuration
// ABOUTME: Reads port, CORS origin, and optional farmer directory file from env vars

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use farmlink_requirements::{DirectoryError, FarmerDirectory};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub farmers_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let farmers_file = env::var("FARMERS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            port,
            cors_origin,
            farmers_file,
        })
    }

    /// Load the farmer directory named by `FARMERS_FILE`, or the
    /// built-in directory when none is configured. A configured but
    /// unreadable file fails startup rather than silently falling back.
    pub fn load_directory(&self) -> Result<FarmerDirectory, DirectoryError> {
        match &self.farmers_file {
            Some(path) => FarmerDirectory::from_json_file(path),
            None => Ok(FarmerDirectory::builtin()),
        }
    }
}
