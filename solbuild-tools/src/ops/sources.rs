// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::Path};

use crate::{
    core::{config::BuildConfiguration, sources},
    Result,
};

/// Writes the sources that would be compiled, relative to `root`, one per line.
pub fn print_sources(
    config: &BuildConfiguration,
    root: impl AsRef<Path>,
    out: &mut impl Write,
) -> Result<usize> {
    let root = root.as_ref();
    let paths = sources::source_paths(config.sources_dir(root))?;
    for path in &paths {
        let shown = path.strip_prefix(root).unwrap_or(path);
        writeln!(out, "{}", shown.display())?;
    }
    if paths.is_empty() {
        info!(@yellow, "no sources found in {}", config.sources_dir(root).display());
    }
    Ok(paths.len())
}
