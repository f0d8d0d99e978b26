// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

pub use project::{
    ProjectManifest, TomlCompiler, TomlGasReporter, TomlNetwork, TomlPaths, TomlSolidity,
};

mod project;

/// Filename for the optional project manifest.
pub const FILENAME: &str = "Solbuild.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing Solbuild.toml")]
    Missing,
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    if !path.as_ref().exists() {
        return Err(ManifestError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

/// Loads the project manifest from `root`, if there is one.
pub fn find(root: impl AsRef<Path>) -> Result<Option<ProjectManifest>, ManifestError> {
    let path = root.as_ref().join(FILENAME);
    match load(&path) {
        Ok(manifest) => {
            debug!(@grey, "loaded manifest {}", path.display());
            Ok(Some(manifest))
        }
        Err(ManifestError::Missing) => Ok(None),
        Err(err) => Err(err),
    }
}
