// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{collections::BTreeMap, path::PathBuf};

use serde::Deserialize;

use crate::core::config::OptimizerConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectManifest {
    #[serde(default)]
    pub solidity: Option<TomlSolidity>,
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
    #[serde(default)]
    pub gas_reporter: Option<TomlGasReporter>,
    #[serde(default)]
    pub paths: Option<TomlPaths>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlSolidity {
    pub compilers: Vec<TomlCompiler>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlCompiler {
    pub version: String,
    #[serde(default)]
    pub optimizer: Option<OptimizerConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlNetwork {
    /// Literal endpoint.
    pub url: Option<String>,
    /// Variable holding the endpoint. Takes precedence over `url` when set.
    pub url_env: Option<String>,
    /// Variable holding the deployer key, `PRIVATE_KEY` if unset.
    pub accounts_env: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlGasReporter {
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlPaths {
    pub sources: PathBuf,
}

impl ProjectManifest {
    pub fn compilers(&self) -> Option<&[TomlCompiler]> {
        self.solidity
            .as_ref()
            .map(|solidity| solidity.compilers.as_slice())
            .filter(|compilers| !compilers.is_empty())
    }
}
