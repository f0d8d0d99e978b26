// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use accounts::print_accounts;
pub use config::{load_config, print_config};
pub use sources::print_sources;

mod accounts;
mod config;
mod sources;
