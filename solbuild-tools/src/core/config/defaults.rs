// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::{CompilerConfig, OptimizerConfig};

pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const EXPLORER_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
pub const REPORT_GAS_VAR: &str = "REPORT_GAS";

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_SOURCES_DIR: &str = "contracts";

pub const LOCALHOST_NETWORK: &str = "localhost";
pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";

const OPTIMIZER_RUNS: u32 = 200;
const COMPILER_VERSIONS: &[&str] = &["0.6.11", "0.8.11"];

/// Remote networks and the variable holding each one's RPC url.
pub const REMOTE_NETWORKS: &[(&str, &str)] = &[
    ("ropsten", "ROPSTEN_URL"),
    ("rinkeby", "RINKEBY_URL"),
    ("goerli", "GOERLI_URL"),
    ("optimisticKov", "OPTIMISTIC_KOVAN_URL"),
    ("kovan", "KOVAN_URL"),
];

pub fn compilers() -> Vec<CompilerConfig> {
    COMPILER_VERSIONS
        .iter()
        .map(|version| CompilerConfig {
            version: version.to_string(),
            optimizer: OptimizerConfig {
                enabled: true,
                runs: OPTIMIZER_RUNS,
            },
        })
        .collect()
}
