use super::periodic_table;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ElementRecord {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub electronegativity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DatabaseFile {
    elements: HashMap<String, ElementRecord>,
}

/// Names and reference scalars keyed by atomic number.
///
/// An absent entry is not an error: the generator falls back to systematic
/// naming and electronegativity extrapolation.
#[derive(Debug, Clone, Default)]
pub struct ElementDatabase {
    records: HashMap<u32, ElementRecord>,
}

impl ElementDatabase {
    /// Database built from the table bundled with the library.
    pub fn bundled() -> Self {
        let records = periodic_table::entries()
            .map(|(z, entry)| {
                (
                    z,
                    ElementRecord {
                        symbol: entry.symbol.to_string(),
                        name: entry.name.to_string(),
                        electronegativity: entry.electronegativity,
                    },
                )
            })
            .collect();
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self, DatabaseLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatabaseLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DatabaseLoadError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, DatabaseLoadError> {
        let file: DatabaseFile = toml::from_str(content).map_err(|e| DatabaseLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let records = file
            .elements
            .into_iter()
            .map(|(key, record)| {
                key.trim()
                    .parse::<u32>()
                    .map(|z| (z, record))
                    .map_err(|_| DatabaseLoadError::InvalidKey {
                        path: origin.to_string(),
                        key,
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self { records })
    }

    pub fn get(&self, z: u32) -> Option<&ElementRecord> {
        self.records.get(&z)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DatabaseLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid atomic number key '{key}' in '{path}'")]
    InvalidKey { path: String, key: String },
}
