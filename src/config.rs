use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    /// All variables are optional; the defaults are the service's documented
    /// fixed behavior (local port 3000, `data/products.json` under the CWD).
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            data_path: std::env::var("DATA_PATH")
                .unwrap_or_else(|_| "data/products.json".to_string())
                .into(),
        })
    }
}
