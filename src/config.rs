use anyhow::{anyhow, Result};
use std::env;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: &str = "3000";

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub http_host: String,
    /// Port the HTTP server binds to
    pub http_port: u16,
}

impl Config {
    /// Reads `HTTP_HOST` and `HTTP_PORT`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let http_host = env::var("HTTP_HOST")
            .unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());
        let http_host = if http_host.trim().is_empty() {
            DEFAULT_HTTP_HOST.to_string()
        } else {
            http_host.trim().to_string()
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            http_host,
            http_port,
        })
    }

    /// `host:port` pair for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
