//! Persistence adapter for the task collection.
//!
//! The entire collection is serialized as a JSON array and rewritten
//! wholesale after every mutation; there is no partial or deferred write.

use super::error::StoreError;
use super::task::Task;
use log::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "tasks.json";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todui";

/// Oversees reading and writing the task data file.
///
pub struct Persistence {
    file_path: PathBuf,
}

impl Persistence {
    /// Return a new instance targeting the given file if provided, otherwise
    /// the default data file path, creating its directory when absent.
    ///
    pub fn new(custom_path: Option<PathBuf>) -> Result<Persistence, StoreError> {
        let file_path = match custom_path {
            Some(path) => path,
            None => Persistence::default_path()?.join(Path::new(FILE_NAME)),
        };
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Ok(Persistence { file_path })
    }

    /// Return a new instance targeting exactly the given file path.
    ///
    pub fn with_path(file_path: PathBuf) -> Persistence {
        Persistence { file_path }
    }

    /// Return the path of the data file.
    ///
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the persisted collection. An absent or unparseable file falls
    /// back to an empty collection; neither is surfaced as an error.
    ///
    pub fn load(&self) -> Vec<Task> {
        if !self.file_path.exists() {
            info!("No data file at {:?}, starting empty.", self.file_path);
            return vec![];
        }
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read data file {:?}: {}", self.file_path, e);
                return vec![];
            }
        };
        match serde_json::from_str(&contents) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Failed to parse data file {:?}: {}", self.file_path, e);
                vec![]
            }
        }
    }

    /// Serialize the full collection and overwrite the data file, returning
    /// any unrecoverable errors.
    ///
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string(tasks)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(&self.file_path).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default data directory or an error if
    /// the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, StoreError> {
        match dirs::home_dir() {
            Some(home) => Ok(Path::new(&home).join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(StoreError::HomeDirectoryNotFound),
        }
    }
}
