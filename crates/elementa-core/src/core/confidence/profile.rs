use super::property::Property;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

const BUNDLED_PROFILES: &str = include_str!("../../../data/confidence_profiles.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ZRange {
    pub range: [u32; 2],
    #[serde(default)]
    pub confidence: HashMap<Property, f64>,
}

impl ZRange {
    pub fn contains(&self, z: u32) -> bool {
        (self.range[0]..=self.range[1]).contains(&z)
    }

    pub fn lower(&self) -> u32 {
        self.range[0]
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    z_ranges: HashMap<String, ZRange>,
    #[serde(default)]
    property_modifiers: HashMap<Property, HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    version: String,
    profiles: HashMap<String, RawProfile>,
}

/// One named calibration: ordered ranges plus per-property modifier deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    ranges: Vec<(String, ZRange)>,
    modifiers: HashMap<Property, HashMap<String, f64>>,
}

impl Profile {
    fn from_raw(raw: RawProfile) -> Self {
        let mut ranges: Vec<_> = raw.z_ranges.into_iter().collect();
        ranges.sort_by(|(name_a, a), (name_b, b)| {
            a.lower().cmp(&b.lower()).then_with(|| name_a.cmp(name_b))
        });
        Self {
            ranges,
            modifiers: raw.property_modifiers,
        }
    }

    /// First range, by ascending lower bound, that contains `z`.
    pub fn range_for(&self, z: u32) -> Option<(&str, &ZRange)> {
        self.ranges
            .iter()
            .find(|(_, range)| range.contains(z))
            .map(|(name, range)| (name.as_str(), range))
    }

    pub fn ranges(&self) -> impl Iterator<Item = (&str, &ZRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), range))
    }

    pub fn modifier(&self, property: Property, name: &str) -> Option<f64> {
        self.modifiers
            .get(&property)
            .and_then(|deltas| deltas.get(name))
            .copied()
    }
}

/// The full profile document. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ConfidenceTable {
    version: String,
    profiles: HashMap<String, Arc<Profile>>,
}

#[derive(Debug, Error)]
pub enum ConfidenceLoadError {
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
    #[error("Invalid range '{name}' in profile '{profile}': lower bound {low} exceeds upper bound {high}")]
    InvalidRange {
        profile: String,
        name: String,
        low: u32,
        high: u32,
    },
    #[error("Confidence profile '{profile}' not found (available: {available})")]
    ProfileNotFound { profile: String, available: String },
}

impl ConfidenceTable {
    /// Profiles shipped with the library: `default`, `conservative`, `optimistic`.
    pub fn bundled() -> Result<Self, ConfidenceLoadError> {
        Self::parse(BUNDLED_PROFILES, "<bundled>")
    }

    pub fn load(path: &Path) -> Result<Self, ConfidenceLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfidenceLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfidenceLoadError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfidenceLoadError> {
        let raw: RawTable = toml::from_str(content).map_err(|e| ConfidenceLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut profiles = HashMap::with_capacity(raw.profiles.len());
        for (profile_name, raw_profile) in raw.profiles {
            if let Some((name, range)) = raw_profile
                .z_ranges
                .iter()
                .find(|(_, range)| range.range[0] > range.range[1])
            {
                return Err(ConfidenceLoadError::InvalidRange {
                    profile: profile_name,
                    name: name.clone(),
                    low: range.range[0],
                    high: range.range[1],
                });
            }
            profiles.insert(profile_name, Arc::new(Profile::from_raw(raw_profile)));
        }

        Ok(Self {
            version: raw.version,
            profiles,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn profile(&self, name: &str) -> Result<Arc<Profile>, ConfidenceLoadError> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfidenceLoadError::ProfileNotFound {
                profile: name.to_string(),
                available: self.profile_names().join(", "),
            })
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
