// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod accounts;
mod config;
mod sources;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the accounts available on a network
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Print the resolved build configuration as JSON
    #[clap(visible_alias = "c")]
    Config(config::Args),
    /// Print the source files that would be compiled
    #[clap(visible_alias = "s")]
    Sources(sources::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args).await,
        Command::Config(args) => config::exec(args),
        Command::Sources(args) => sources::exec(args),
    }
}
