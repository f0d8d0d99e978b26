// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use solbuild_tools::ops;

use crate::{common_args::ProjectArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CliResult {
    let config = args.project.config()?;
    let count = ops::print_sources(&config, args.project.root(), &mut std::io::stdout().lock())?;
    log::debug!("{count} sources selected");
    Ok(())
}
