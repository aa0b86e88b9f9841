use std::env;
use std::path::Path;

use kiruna_auth::AuthConfig;
use serde::Deserialize;

/// API server configuration.
///
/// Loaded once at process start and passed down immutably. Precedence is
/// environment variables over the optional TOML file over defaults.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub cdn_base_url: String,
    pub auth: AuthConfig,
}

/// Optional overrides read from a TOML file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    cors_origin: Option<String>,
    cdn_base_url: Option<String>,
    auth_secret: Option<String>,
    auth_ttl_secs: Option<i64>,
}

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_CDN_BASE_URL: &str = "http://localhost:9000/kiruna-media";
const DEFAULT_AUTH_SECRET: &str = "kiruna-dev-secret";
const DEFAULT_AUTH_TTL_SECS: i64 = 86_400;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            auth: AuthConfig::new(DEFAULT_AUTH_SECRET, DEFAULT_AUTH_TTL_SECS),
        }
    }
}

impl ApiConfig {
    /// Load configuration: defaults, then the file named by `KIRUNA_CONFIG`
    /// (if set), then environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(path) = env::var("KIRUNA_CONFIG") {
            config = config.overlay_file(Path::new(&path))?;
        }
        Ok(config.overlay_env())
    }

    /// Apply overrides from a TOML file
    pub fn overlay_file(mut self, path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&raw)?;

        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(cors_origin) = file.cors_origin {
            self.cors_origin = cors_origin;
        }
        if let Some(cdn_base_url) = file.cdn_base_url {
            self.cdn_base_url = cdn_base_url;
        }
        if let Some(secret) = file.auth_secret {
            self.auth.secret = secret;
        }
        if let Some(ttl) = file.auth_ttl_secs {
            self.auth.token_ttl_secs = ttl;
        }
        Ok(self)
    }

    /// Apply overrides from environment variables
    pub fn overlay_env(mut self) -> Self {
        if let Some(port) = env::var("KIRUNA_PORT").ok().and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Ok(cors_origin) = env::var("KIRUNA_CORS_ORIGIN") {
            self.cors_origin = cors_origin;
        }
        if let Ok(cdn_base_url) = env::var("KIRUNA_CDN_BASE_URL") {
            self.cdn_base_url = cdn_base_url;
        }
        if let Ok(secret) = env::var("KIRUNA_AUTH_SECRET") {
            self.auth.secret = secret;
        }
        if let Some(ttl) = env::var("KIRUNA_AUTH_TTL_SECS").ok().and_then(|t| t.parse().ok()) {
            self.auth.token_ttl_secs = ttl;
        }
        self
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Whether the signing secret is still the development default
    pub fn uses_default_secret(&self) -> bool {
        self.auth.secret == DEFAULT_AUTH_SECRET
    }
}
