// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for working with Solidity contract projects.
//!
//! The crate resolves a project's [`BuildConfiguration`](core::config::BuildConfiguration)
//! from an injected [`Environment`](core::config::Environment) and an optional
//! `Solbuild.toml` manifest, selects the sources that should be handed to the compiler, and
//! lists the accounts configured for a network.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
