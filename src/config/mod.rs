//! Configuration management module.
//!
//! This module handles loading the application configuration, including the
//! data file override and theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub theme_name: String,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            data_file: None,
            theme_name: default_theme_name(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; the
    /// directory is created so the data file has somewhere to live.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
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

        let file_path = dir_path.join(Path::new(FILE_NAME));

        // If file exists, extract the data file override and theme name
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.data_file = data.data_file;
            self.theme_name = data.theme_name;
        }

        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_dir() -> PathBuf {
        std::env::temp_dir().join(format!("todui-config-test-{}", rand::random::<u64>()))
    }

    #[test]
    fn test_new_has_defaults() {
        let config = Config::new();
        assert!(config.data_file.is_none());
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        assert!(config.data_file.is_none());
        assert_eq!(config.theme_name, "tokyo-night");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_reads_fields() {
        let dir = temp_config_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "data_file: /tmp/my-tasks.json\ntheme_name: rose-pine-dawn\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/my-tasks.json")));
        assert_eq!(config.theme_name, "rose-pine-dawn");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_applies_serde_defaults() {
        let dir = temp_config_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "data_file: /tmp/tasks.json\n").unwrap();
        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_invalid_yaml_is_an_error() {
        let dir = temp_config_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "data_file: [unclosed\n").unwrap();
        let mut config = Config::new();
        assert!(config.load(Some(dir.to_str().unwrap())).is_err());
        let _ = fs::remove_dir_all(dir);
    }
}
