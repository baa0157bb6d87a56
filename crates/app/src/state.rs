use std::{fs, path::PathBuf};

use common::prelude::{LocalStore, StoredToken, DEFAULT_CATALOG_URL};
use serde::{Deserialize, Serialize};
use url::Url;

pub const APP_NAME: &str = "shelf";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the book catalog API
    #[serde(default = "default_catalog_url")]
    pub catalog_url: Url,
}

fn default_catalog_url() -> Url {
    Url::parse(DEFAULT_CATALOG_URL).expect("hardcoded URL must parse")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the shelf directory (~/.shelf)
    pub shelf_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Path to the session store (holds the login token)
    pub session_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the shelf directory path (custom or default ~/.shelf)
    pub fn shelf_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new shelf state directory.
    ///  A directory that exists without a config.toml (e.g. one created
    ///  by logging in first) is initialized in place; its session is kept.
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let shelf_dir = Self::shelf_dir(custom_path)?;
        let config_path = shelf_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&shelf_dir)?;

        let config = config.unwrap_or_default();
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        // The session file is created on first login
        let session_path = shelf_dir.join(SESSION_FILE_NAME);

        Ok(Self {
            shelf_dir,
            config_path,
            session_path,
            config,
        })
    }

    /// Load existing state from shelf directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let shelf_dir = Self::shelf_dir(custom_path)?;

        if !shelf_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = shelf_dir.join(CONFIG_FILE_NAME);
        let session_path = shelf_dir.join(SESSION_FILE_NAME);

        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            shelf_dir,
            config_path,
            session_path,
            config,
        })
    }

    /// Load state if a config.toml is present, otherwise fall
    ///  back to default configuration at the usual paths.
    ///  Browsing and logging in work without running `init` first,
    ///  and logging in may create the directory before any config exists.
    pub fn load_or_default(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let shelf_dir = Self::shelf_dir(custom_path)?;
        if shelf_dir.join(CONFIG_FILE_NAME).exists() {
            return Self::load(Some(shelf_dir));
        }

        Ok(Self {
            config_path: shelf_dir.join(CONFIG_FILE_NAME),
            session_path: shelf_dir.join(SESSION_FILE_NAME),
            shelf_dir,
            config: AppConfig::default(),
        })
    }

    /// Handle on the persisted session store
    pub fn session_store(&self) -> LocalStore {
        LocalStore::open(&self.session_path)
    }

    /// Token presence as seen by the navigation guard
    pub fn credentials(&self) -> StoredToken {
        StoredToken::new(self.session_store())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("shelf directory not initialized. Run 'shelf init' first")]
    NotInitialized,

    #[error("shelf directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
