// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Selection of the Solidity sources handed to the compiler.

use std::path::{Path, PathBuf};

use glob::glob;

/// Sources whose name ends with this marker are never compiled.
pub const NOCOMP_SUFFIX: &str = ".nocomp.sol";

const SOURCE_PATTERN: &str = "**/*.sol";

#[derive(Debug, thiserror::Error)]
pub enum SourcesError {
    #[error("non-utf8 sources directory: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("invalid glob pattern {0}: {1}")]
    GlobPattern(String, glob::PatternError),
    #[error("failed to read source entry: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Returns whether `path` carries the reserved [`NOCOMP_SUFFIX`].
pub fn is_excluded(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .as_os_str()
        .to_string_lossy()
        .ends_with(NOCOMP_SUFFIX)
}

/// Drops every path ending in [`NOCOMP_SUFFIX`], keeping the rest in order.
pub fn filter_source_paths<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<P> {
    paths.into_iter().filter(|p| !is_excluded(p)).collect()
}

/// Finds every `.sol` file below `root`, sorted. A missing directory has no sources.
pub fn discover_source_paths(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, SourcesError> {
    let root = root.as_ref();
    if !root.is_dir() {
        debug!(@grey, "sources directory {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let root_str = root
        .to_str()
        .ok_or_else(|| SourcesError::NonUtf8Path(root.to_path_buf()))?;
    let pattern = format!(
        "{}/{SOURCE_PATTERN}",
        glob::Pattern::escape(root_str.trim_end_matches('/'))
    );
    let entries = glob(&pattern).map_err(|e| SourcesError::GlobPattern(pattern.clone(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Discovers the sources below `root` and filters out the excluded ones.
pub fn source_paths(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, SourcesError> {
    let discovered = discover_source_paths(root)?;
    let total = discovered.len();
    let paths = filter_source_paths(discovered);
    debug!(
        @grey,
        "found {total} sources, excluded {} ending in {NOCOMP_SUFFIX}",
        total - paths.len()
    );
    Ok(paths)
}
