// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::ConfigError;

/// Source of environment variables for the configuration loader.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Variables from a `.env` file, shadowed by an overlay environment.
///
/// The file is read once and kept in memory; the global process environment is never written.
#[derive(Debug)]
pub struct DotenvEnv<E = ProcessEnv> {
    overlay: E,
    file: HashMap<String, String>,
}

impl DotenvEnv<ProcessEnv> {
    /// Layers the process environment over `path`. A missing file contributes nothing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::with_overlay(path, ProcessEnv)
    }
}

impl<E: Environment> DotenvEnv<E> {
    pub fn with_overlay(path: impl AsRef<Path>, overlay: E) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = if path.is_file() {
            read_dotenv(path)?
        } else {
            debug!(@grey, "no env file at {}", path.display());
            HashMap::new()
        };
        Ok(Self { overlay, file })
    }

    /// Only the overlay, with no file behind it.
    pub fn without_file(overlay: E) -> Self {
        Self {
            overlay,
            file: HashMap::new(),
        }
    }

    /// Number of variables read from the file.
    pub fn file_len(&self) -> usize {
        self.file.len()
    }
}

impl<E: Environment> Environment for DotenvEnv<E> {
    fn var(&self, key: &str) -> Option<String> {
        self.overlay.var(key).or_else(|| self.file.get(key).cloned())
    }
}

fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_err = |source| ConfigError::Dotenv {
        path: PathBuf::from(path),
        source,
    };
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(to_err)? {
        let (key, value) = item.map_err(to_err)?;
        vars.insert(key, value);
    }
    debug!(@grey, "read {} variables from {}", vars.len(), path.display());
    Ok(vars)
}
