use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("repository not specified in config")]
    MissingRepository,
}

/// Issue-creation config as read from disk.
///
/// Keywords are kept sorted so the order issues are filed in does not depend
/// on hashing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: String,

    #[serde(default, deserialize_with = "keywords_allowing_null")]
    pub keywords: BTreeMap<String, CrudFlags>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct CrudFlags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub create: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub update: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delete: bool,
}

/// Reads an explicit JSON `null` the same way as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn keywords_allowing_null<'de, D>(deserializer: D) -> Result<BTreeMap<String, CrudFlags>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<CrudFlags>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(keyword, flags)| (keyword, flags.unwrap_or_default()))
        .collect())
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&raw, path)?;
        tracing::debug!(
            path = %path.display(),
            repo = %config.repo,
            keywords = config.keywords.len(),
            "loaded config"
        );
        Ok(config)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.repo.trim().is_empty() {
            return Err(ConfigError::MissingRepository);
        }

        Ok(config)
    }
}
