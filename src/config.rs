//! Configuration file support for ferro-aa.
//!
//! This module loads `.ferro-aa.toml` configuration files which set the
//! default conversion direction, stop codon symbol and line limit.
//!
//! # Example Configuration
//!
//! ```toml
//! [convert]
//! direction = "one-to-three"
//! stop-symbol = "Ter"
//! max-lines = 5000
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-aa.toml` in current directory
//! 2. `~/.config/ferro/aa.toml`
//!
//! CLI flags take precedence over config file settings.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::amino_acid::StopSymbol;
use crate::batch::BatchConfig;
use crate::convert::Direction;
use crate::error::FerroAaError;

/// File name searched for in the current directory
pub const LOCAL_CONFIG_FILE: &str = ".ferro-aa.toml";

/// Parsed configuration from a .ferro-aa.toml file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FerroAaConfig {
    /// Conversion defaults.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// `[convert]` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConvertConfig {
    /// Default conversion direction.
    pub direction: Option<Direction>,
    /// Default stop codon symbol.
    pub stop_symbol: Option<StopSymbol>,
    /// Maximum lines per batch.
    pub max_lines: Option<usize>,
}

impl FerroAaConfig {
    /// Load configuration from the default locations.
    ///
    /// A file that exists but fails to parse is logged and skipped.
    pub fn load() -> Option<Self> {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => warn!("Ignoring config file {}: {}", path.display(), e),
            }
        }
        None
    }

    /// Candidate config file paths, in search order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(home) = dirs_home() {
            paths.push(home.join(".config").join("ferro").join("aa.toml"));
        }
        paths
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, FerroAaError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, FerroAaError> {
        let config: FerroAaConfig = toml::from_str(content)?;
        if config.convert.max_lines == Some(0) {
            return Err(FerroAaError::Config {
                msg: "max-lines must be greater than 0".to_string(),
            });
        }
        Ok(config)
    }

    /// Convert this config to a BatchConfig, filling gaps with defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        self.merge_with_cli(None, None, None)
    }

    /// Merge this config with CLI arguments.
    /// CLI arguments take precedence.
    pub fn merge_with_cli(
        &self,
        direction: Option<Direction>,
        stop_symbol: Option<StopSymbol>,
        max_lines: Option<usize>,
    ) -> BatchConfig {
        let defaults = BatchConfig::default();
        BatchConfig {
            direction: direction
                .or(self.convert.direction)
                .unwrap_or(defaults.direction),
            stop_symbol: stop_symbol
                .or(self.convert.stop_symbol)
                .unwrap_or(defaults.stop_symbol),
            max_lines: max_lines
                .or(self.convert.max_lines)
                .unwrap_or(defaults.max_lines),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
