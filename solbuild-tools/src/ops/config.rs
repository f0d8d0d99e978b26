// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::Path};

use crate::{
    core::{
        config::{self, BuildConfiguration, Environment},
        manifest,
    },
    Result,
};

/// Resolves the configuration of the project at `root`.
pub fn load_config(root: impl AsRef<Path>, env: &impl Environment) -> Result<BuildConfiguration> {
    let manifest = manifest::find(root)?;
    Ok(config::load(env, manifest.as_ref()))
}

/// Writes the configuration as JSON, with secrets masked unless `show_secrets` is set.
pub fn print_config(
    config: &BuildConfiguration,
    show_secrets: bool,
    out: &mut impl Write,
) -> Result<()> {
    let json = if show_secrets {
        config.to_json()?
    } else {
        config.redacted().to_json()?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
