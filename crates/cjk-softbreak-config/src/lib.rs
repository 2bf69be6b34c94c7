use serde::Deserialize;
use std::env::VarError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot expand docs_path {value:?} from {config_path}: {source}")]
    ExpandError {
        config_path: PathBuf,
        value: String,
        source: shellexpand::LookupError<VarError>,
    },

    #[error("docs_path {docs_path} from {config_path} is not a directory")]
    DocsPathNotADirectory {
        config_path: PathBuf,
        docs_path: PathBuf,
    },
}

/// Settings read from `~/.config/cjk-softbreak/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Root of the translated documentation tree to process.
    ///
    /// After loading this is expanded, absolute when the file gave a
    /// relative path, and known to name a directory.
    pub docs_path: PathBuf,
}

impl Config {
    /// Load and resolve the config at `config_path`. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let raw: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let docs_path = Self::resolve_docs_path(config_path, &raw.docs_path)?;
        Ok(Some(Config { docs_path }))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cjk-softbreak");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and `$VAR`, anchor a relative result at the config file's
    /// directory, and require a directory.
    fn resolve_docs_path(config_path: &Path, docs_path: &Path) -> Result<PathBuf, ConfigError> {
        let expanded = Self::expand_path(docs_path).map_err(|source| ConfigError::ExpandError {
            config_path: config_path.to_path_buf(),
            value: docs_path.to_string_lossy().into_owned(),
            source,
        })?;

        let resolved = match config_path.parent() {
            Some(config_dir) if expanded.is_relative() => config_dir.join(expanded),
            _ => expanded,
        };

        if !resolved.is_dir() {
            return Err(ConfigError::DocsPathNotADirectory {
                config_path: config_path.to_path_buf(),
                docs_path: resolved,
            });
        }
        Ok(resolved)
    }

    fn expand_path(path: &Path) -> Result<PathBuf, shellexpand::LookupError<VarError>> {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str)?;
        Ok(PathBuf::from(expanded.as_ref()))
    }
}
