// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod accounts;
pub mod config;
pub mod manifest;
pub mod network;
pub mod sources;
