//! Session configuration with pluggable persistence.

use miette::Result;
use miette::miette;
use serde::{Deserialize, Serialize};

use std::future::Future;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The base URL for the upload endpoint and the remote post store.
    pub endpoint: String,
    /// The session token sent with authenticated requests.
    pub session_id: Option<String>,
}

impl Config {
    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self> {
        loader
            .load()
            .await
            .map_err(|_| miette!("Failed to load configuration"))
    }
    /// Saves the configuration using the provided saver.
    pub async fn save(&self, saver: &impl Saver) -> Result<()> {
        saver
            .save(self)
            .await
            .map_err(|_| miette!("Failed to save configuration"))
    }
}

impl Default for Config {
    /// Creates a new default configuration.
    ///
    /// The default configuration points at a locally running backend and
    /// carries no session token.
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_owned(),
            session_id: None,
        }
    }
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(
        &self,
    ) -> impl Future<
        Output = core::result::Result<Config, Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

/// The trait for saving configuration data.
pub trait Saver {
    /// Saves the configuration data.
    fn save(
        &self,
        config: &Config,
    ) -> impl Future<
        Output = core::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a configuration file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// This `FileStore` will read and write to the file at the given path.
    /// [`Config`] data will be serialized and deserialized using the file
    /// extension. Only `.json` files are supported.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Loader for FileStore {
    async fn load(
        &self,
    ) -> core::result::Result<Config, Box<dyn std::error::Error + Send + Sync + 'static>> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&std::fs::read_to_string(&self.path)?)?),
            _ => Err(miette!("Unsupported file format").into()),
        }
    }
}

impl Saver for FileStore {
    async fn save(
        &self,
        config: &Config,
    ) -> core::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(std::fs::write(
                &self.path,
                serde_json::to_string_pretty(config)?,
            )?),
            _ => Err(miette!("Unsupported file format").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = std::env::temp_dir();
        let store = FileStore::new(dir.join("scribe_config_test.json"));

        let config = Config {
            endpoint: "https://files.example.test".into(),
            session_id: Some("session-1".into()),
        };
        config.save(&store).await.unwrap();

        let loaded = Config::load(&store).await.unwrap();
        assert_eq!(loaded.endpoint, config.endpoint);
        assert_eq!(loaded.session_id, config.session_id);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let store = FileStore::new("/tmp/scribe_config_test.yaml");
        assert!(Config::load(&store).await.is_err());
    }
}
