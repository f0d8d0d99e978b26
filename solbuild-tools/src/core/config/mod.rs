// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Resolved build configuration.
//!
//! A [`BuildConfiguration`] is constructed once at startup by [`load`] and then passed by
//! reference to whatever needs it. Nothing in here reads the process environment directly;
//! variables come from an injected [`Environment`].

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::network::NetworkError;

pub use defaults::{
    DEFAULT_CURRENCY, DEFAULT_SOURCES_DIR, EXPLORER_API_KEY_VAR, LOCALHOST_NETWORK,
    PRIVATE_KEY_VAR, REPORT_GAS_VAR,
};
pub use env::{DotenvEnv, Environment, ProcessEnv};
pub use loader::load;

mod defaults;
mod env;
mod loader;

/// Placeholder printed in place of secrets.
pub const REDACTED: &str = "<redacted>";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub compilers: Vec<CompilerConfig>,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub gas_reporter: GasReporterConfig,
    pub explorer_api_key: Option<String>,
    pub paths: PathsConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerConfig {
    pub version: String,
    pub optimizer: OptimizerConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct OptimizerConfig {
    pub enabled: bool,
    pub runs: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub url: String,
    pub accounts: Vec<String>,
    /// Variable the url was read from, if any.
    #[serde(skip)]
    pub url_var: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GasReporterConfig {
    pub enabled: bool,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathsConfig {
    pub sources: PathBuf,
}

impl BuildConfiguration {
    /// Looks up a network by name.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, NetworkError> {
        self.networks.get(name).ok_or_else(|| NetworkError::Unknown {
            name: name.to_string(),
            known: self.networks.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }

    /// Directory scanned for sources, relative to `root` unless absolute.
    pub fn sources_dir(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.paths.sources)
    }

    /// Returns a copy with private keys and the explorer API key masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        for network in config.networks.values_mut() {
            for account in network.accounts.iter_mut() {
                *account = REDACTED.to_string();
            }
        }
        if config.explorer_api_key.is_some() {
            config.explorer_api_key = Some(REDACTED.to_string());
        }
        config
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl NetworkConfig {
    /// Returns the url, or an error naming where it should have come from.
    pub fn require_url(&self, name: &str) -> Result<&str, NetworkError> {
        if self.url.is_empty() {
            return Err(NetworkError::MissingUrl {
                network: name.to_string(),
                var: self.url_var.clone(),
            });
        }
        Ok(&self.url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        source: dotenvy::Error,
    },
}
