//! Configuration module
//!
//! Server, storage, and HTTP-front settings. Everything the handlers need is
//! carried here and handed to them at construction time; nothing reads the
//! environment after startup.

use std::env;
use std::path::{Path, PathBuf};

// Common constants
const SERVER_PORT: u16 = 5174;
const UPLOADS_DIR: &str = "./uploads";
const PUBLIC_BASE_URL: &str = "http://localhost:5174";
const MAX_BODY_SIZE_MB: usize = 50;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub uploads_dir: PathBuf,
    /// Absolute prefix used when building listing URLs (no trailing slash)
    pub public_base_url: String,
    pub max_body_size_bytes: usize,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: SERVER_PORT,
            uploads_dir: PathBuf::from(UPLOADS_DIR),
            public_base_url: PUBLIC_BASE_URL.to_string(),
            max_body_size_bytes: MAX_BODY_SIZE_MB * 1024 * 1024,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Unset or unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = lookup("SERVER_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(SERVER_PORT);

        let uploads_dir = lookup("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(UPLOADS_DIR));

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| PUBLIC_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let max_body_size_mb = lookup("MAX_BODY_SIZE_MB")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(MAX_BODY_SIZE_MB);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Config {
            server_port,
            uploads_dir,
            public_base_url,
            max_body_size_bytes: max_body_size_mb * 1024 * 1024,
            cors_origins,
            environment,
        }
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail fast on settings the server cannot run with
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }

        if self.uploads_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOADS_DIR cannot be empty"));
        }

        if self.max_body_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_SIZE_MB must be greater than 0"));
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "PUBLIC_BASE_URL must start with http:// or https:// (got '{}')",
                self.public_base_url
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
