//! Configuration for the ferro-aa web service

use serde::{Deserialize, Serialize};

use crate::batch::DEFAULT_MAX_LINES;

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Conversion limits
    #[serde(default)]
    pub convert: ConvertLimits,
    /// Mutalyzer passthrough proxy
    #[serde(default)]
    pub mutalyzer: MutalyzerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 3000)
    pub port: u16,
    /// Maximum request size (default: "1MB")
    pub max_request_size: String,
}

/// Limits applied to `/api/v1/convert`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConvertLimits {
    /// Maximum lines per request (default: 1000). Requests may lower it.
    pub max_lines: usize,
}

/// Mutalyzer proxy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MutalyzerConfig {
    /// Whether the proxy route is served
    pub enabled: bool,
    /// Mutalyzer base URL; requests go to `{api_url}/api/normalize/{description}`
    pub api_url: String,
    /// Upstream request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// `max-age` of the `Cache-Control` header added to proxied responses
    pub cache_max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_request_size: "1MB".to_string(),
        }
    }
}

impl Default for ConvertLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl Default for MutalyzerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://mutalyzer.nl".to_string(),
            timeout_seconds: 30,
            cache_max_age_seconds: 3600,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.convert.max_lines == 0 {
            return Err("convert.max-lines must be greater than 0".to_string());
        }

        if self.mutalyzer.enabled {
            let url = &self.mutalyzer.api_url;
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!(
                    "Mutalyzer api_url must start with http:// or https://: {}",
                    url
                ));
            }
            if self.mutalyzer.timeout_seconds == 0 {
                return Err("Mutalyzer timeout_seconds must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}
