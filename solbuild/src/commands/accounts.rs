// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use solbuild_tools::ops;

use crate::{common_args::ProjectArgs, constants::DEFAULT_NETWORK, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network whose accounts to print
    #[arg(long, default_value = DEFAULT_NETWORK)]
    network: String,

    #[command(flatten)]
    project: ProjectArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let config = args.project.config()?;
    ops::print_accounts(&config, &args.network, &mut std::io::stdout()).await?;
    Ok(())
}
