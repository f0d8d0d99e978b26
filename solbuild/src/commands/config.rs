// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use solbuild_tools::ops;

use crate::{common_args::ProjectArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print private keys and the explorer API key instead of masking them.
    #[arg(long)]
    show_secrets: bool,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CliResult {
    let config = args.project.config()?;
    ops::print_config(&config, args.show_secrets, &mut std::io::stdout().lock())?;
    Ok(())
}
