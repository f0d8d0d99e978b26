// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use solbuild_tools::{
    core::config::{BuildConfiguration, DotenvEnv, ProcessEnv},
    ops,
};

use crate::{constants::DEFAULT_ENV_FILE, error::CliError};

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Project root holding Solbuild.toml, the env file and the sources directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Env file to read variables from, relative to the project root. Defaults to `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Only read variables from the process environment
    #[arg(long, conflicts_with = "env_file")]
    no_dotenv: bool,
}

impl ProjectArgs {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the environment and resolves the configuration, once.
    pub fn config(&self) -> Result<BuildConfiguration, CliError> {
        let env = if self.no_dotenv {
            DotenvEnv::without_file(ProcessEnv)
        } else {
            let file = self.env_file.as_deref().unwrap_or(Path::new(DEFAULT_ENV_FILE));
            let path = self.root.join(file);
            DotenvEnv::from_path(path)?
        };
        Ok(ops::load_config(&self.root, &env)?)
    }
}
