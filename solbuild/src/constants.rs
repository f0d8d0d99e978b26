// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Network used by `accounts` when none is given.
pub const DEFAULT_NETWORK: &str = solbuild_tools::core::config::LOCALHOST_NETWORK;

/// Env file read from the project root unless overridden.
pub const DEFAULT_ENV_FILE: &str = ".env";
