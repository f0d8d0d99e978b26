// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{collections::BTreeMap, path::PathBuf};

use super::{
    defaults::{self, LOCALHOST_URL, REMOTE_NETWORKS},
    BuildConfiguration, CompilerConfig, Environment, GasReporterConfig, NetworkConfig,
    OptimizerConfig, PathsConfig, DEFAULT_CURRENCY, DEFAULT_SOURCES_DIR, EXPLORER_API_KEY_VAR,
    LOCALHOST_NETWORK, PRIVATE_KEY_VAR, REPORT_GAS_VAR,
};
use crate::core::manifest::{ProjectManifest, TomlCompiler, TomlNetwork};

/// Optimizer settings for manifest compilers that do not specify any.
const MANIFEST_OPTIMIZER: OptimizerConfig = OptimizerConfig {
    enabled: false,
    runs: 200,
};

/// Assembles the build configuration.
///
/// Absent variables never fail the load: a missing url becomes an empty string, a missing key
/// leaves the network without accounts. Problems surface when a consumer uses the value.
pub fn load(env: &impl Environment, manifest: Option<&ProjectManifest>) -> BuildConfiguration {
    let compilers = match manifest.and_then(ProjectManifest::compilers) {
        Some(compilers) => compilers.iter().map(manifest_compiler).collect(),
        None => defaults::compilers(),
    };

    let mut networks = BTreeMap::new();
    networks.insert(
        LOCALHOST_NETWORK.to_string(),
        NetworkConfig {
            url: LOCALHOST_URL.to_string(),
            accounts: Vec::new(),
            url_var: None,
        },
    );
    for (name, url_var) in REMOTE_NETWORKS {
        let network = NetworkConfig {
            url: env.var(url_var).unwrap_or_default(),
            accounts: env.var(PRIVATE_KEY_VAR).into_iter().collect(),
            url_var: Some(url_var.to_string()),
        };
        networks.insert(name.to_string(), network);
    }
    for (name, network) in manifest.into_iter().flat_map(|m| m.networks.iter()) {
        networks.insert(name.clone(), manifest_network(env, name, network));
    }

    let currency = manifest
        .and_then(|m| m.gas_reporter.as_ref())
        .map(|g| g.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let gas_reporter = GasReporterConfig {
        enabled: env.var(REPORT_GAS_VAR).is_some(),
        currency,
    };

    let sources = manifest
        .and_then(|m| m.paths.as_ref())
        .map(|p| p.sources.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCES_DIR));

    let config = BuildConfiguration {
        compilers,
        networks,
        gas_reporter,
        explorer_api_key: env.var(EXPLORER_API_KEY_VAR),
        paths: PathsConfig { sources },
    };
    debug!(
        @grey,
        "loaded {} compilers and {} networks",
        config.compilers.len(),
        config.networks.len()
    );
    config
}

fn manifest_compiler(compiler: &TomlCompiler) -> CompilerConfig {
    CompilerConfig {
        version: compiler.version.clone(),
        optimizer: compiler.optimizer.unwrap_or(MANIFEST_OPTIMIZER),
    }
}

fn manifest_network(env: &impl Environment, name: &str, network: &TomlNetwork) -> NetworkConfig {
    if network.url.is_none() && network.url_env.is_none() {
        warn!(@yellow, "network {name} sets neither url nor url-env");
    }
    let url = network
        .url_env
        .as_deref()
        .and_then(|var| env.var(var))
        .or_else(|| network.url.clone())
        .unwrap_or_default();
    let key_var = network.accounts_env.as_deref().unwrap_or(PRIVATE_KEY_VAR);
    NetworkConfig {
        url,
        accounts: env.var(key_var).into_iter().collect(),
        url_var: network.url_env.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn manifest(text: &str) -> ProjectManifest {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&env(&[]), None);

        let versions: Vec<_> = config.compilers.iter().map(|c| c.version.as_str()).collect();
        assert_eq!(versions, ["0.6.11", "0.8.11"]);
        for compiler in &config.compilers {
            assert_eq!(
                compiler.optimizer,
                OptimizerConfig {
                    enabled: true,
                    runs: 200
                }
            );
        }

        let names: Vec<_> = config.networks.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["goerli", "kovan", "localhost", "optimisticKov", "rinkeby", "ropsten"]
        );
        for (name, var) in REMOTE_NETWORKS {
            let network = &config.networks[*name];
            assert_eq!(network.url, "");
            assert!(network.accounts.is_empty());
            assert_eq!(network.url_var.as_deref(), Some(*var));
        }

        assert_eq!(
            config.gas_reporter,
            GasReporterConfig {
                enabled: false,
                currency: "USD".to_string()
            }
        );
        assert_eq!(config.explorer_api_key, None);
        assert_eq!(config.paths.sources, PathBuf::from("contracts"));
    }

    #[test]
    fn reads_urls_and_keys() {
        let config = load(
            &env(&[
                ("ROPSTEN_URL", "https://ropsten.test"),
                ("OPTIMISTIC_KOVAN_URL", "https://optimism-kovan.test"),
                ("PRIVATE_KEY", "0x01"),
                ("ETHERSCAN_API_KEY", "ABC123"),
            ]),
            None,
        );
        assert_eq!(config.networks["ropsten"].url, "https://ropsten.test");
        assert_eq!(
            config.networks["optimisticKov"].url,
            "https://optimism-kovan.test"
        );
        assert_eq!(config.networks["rinkeby"].url, "");
        for (name, _) in REMOTE_NETWORKS {
            assert_eq!(config.networks[*name].accounts, vec!["0x01"]);
        }
        assert!(config.networks["localhost"].accounts.is_empty());
        assert_eq!(config.explorer_api_key.as_deref(), Some("ABC123"));
    }

    #[test]
    fn set_but_empty_variables_count_as_present() {
        let config = load(&env(&[("PRIVATE_KEY", ""), ("REPORT_GAS", "")]), None);
        assert_eq!(config.networks["goerli"].accounts, vec![""]);
        assert!(config.gas_reporter.enabled);
    }

    #[test]
    fn manifest_overrides_defaults() {
        let manifest = manifest(
            r#"
            [[solidity.compilers]]
            version = "0.8.24"

            [networks.goerli]
            url = "https://goerli.manifest"

            [networks.arbitrum]
            url-env = "ARBITRUM_URL"
            url = "https://arb.fallback"
            accounts-env = "ARBITRUM_KEY"

            [gas-reporter]
            currency = "EUR"

            [paths]
            sources = "src/contracts"
            "#,
        );
        let config = load(
            &env(&[
                ("GOERLI_URL", "https://goerli.env"),
                ("ARBITRUM_URL", "https://arb.env"),
                ("ARBITRUM_KEY", "0x02"),
                ("PRIVATE_KEY", "0x01"),
            ]),
            Some(&manifest),
        );

        assert_eq!(
            config.compilers,
            vec![CompilerConfig {
                version: "0.8.24".to_string(),
                optimizer: MANIFEST_OPTIMIZER,
            }]
        );
        assert_eq!(config.networks["goerli"].url, "https://goerli.manifest");
        assert_eq!(config.networks["goerli"].url_var, None);
        assert_eq!(config.networks["arbitrum"].url, "https://arb.env");
        assert_eq!(config.networks["arbitrum"].accounts, vec!["0x02"]);
        assert_eq!(config.networks["kovan"].accounts, vec!["0x01"]);
        assert_eq!(config.gas_reporter.currency, "EUR");
        assert_eq!(config.paths.sources, PathBuf::from("src/contracts"));
    }

    #[test]
    fn manifest_url_env_falls_back_to_literal() {
        let manifest = manifest(
            r#"
            [networks.arbitrum]
            url-env = "ARBITRUM_URL"
            url = "https://arb.fallback"

            [networks.bare]
            "#,
        );
        let config = load(&env(&[]), Some(&manifest));
        assert_eq!(config.networks["arbitrum"].url, "https://arb.fallback");
        assert_eq!(config.networks["bare"].url, "");
        assert!(config.networks["bare"].accounts.is_empty());
    }
}
