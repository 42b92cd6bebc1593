//! Configuration management module.
//!
//! This module handles loading the application configuration, which
//! currently carries one optional setting: an override for the API base URL
//! (useful for self-hosted mirrors and for pointing at a local test server).

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/rickmorty-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub base_url: Option<String>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config { base_url: None }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is not an error; the defaults apply
    /// and the directory is created for a future config file.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        let file_path = dir_path.join(Path::new(FILE_NAME));

        // If file exists, try to extract settings
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
        }

        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
