// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use crate::{
    core::{accounts, config::BuildConfiguration},
    Result,
};

/// Writes the address of every account available on `network`, one per line.
pub async fn print_accounts(
    config: &BuildConfiguration,
    network: &str,
    out: &mut impl Write,
) -> Result<usize> {
    let addresses = accounts::network_accounts(network, config.network(network)?).await?;
    for address in &addresses {
        writeln!(out, "{address}")?;
    }
    if addresses.is_empty() {
        info!(@yellow, "network {network} has no accounts");
    }
    Ok(addresses.len())
}
