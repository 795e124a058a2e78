/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Remote SixtyFour API configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the remote API (default: `https://api.sixtyfour.ai`).
    pub base_url: String,
    /// Credential attached to every relayed call as `x-api-key`.
    ///
    /// `None` when the variable is unset; empty and placeholder values are
    /// normalized away by the client.
    pub api_key: Option<String>,
}

impl UpstreamConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                    |
    /// |---------------------|----------------------------|
    /// | `API_BASE_URL`      | `https://api.sixtyfour.ai` |
    /// | `SIXTYFOUR_API_KEY` | unset                      |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "https://api.sixtyfour.ai".into());

        let api_key = std::env::var("SIXTYFOUR_API_KEY").ok();

        Self { base_url, api_key }
    }
}
