use crate::core::crystallization::detector::{
    CrystallizationDetector, DEFAULT_VIOLATION_THRESHOLD,
};
use std::path::PathBuf;
use thiserror::Error;

/// Theoretical model label recorded on generators unless overridden.
pub const DEFAULT_MODEL: &str = "pyykko_2011";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for [`ElementGenerator`](crate::engine::generator::ElementGenerator).
///
/// Absent paths select the data bundled with the library.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub profile: String,
    pub model: String,
    pub profiles_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    profile: Option<String>,
    model: Option<String>,
    profiles_path: Option<PathBuf>,
    database_path: Option<PathBuf>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }
    pub fn model(mut self, label: impl Into<String>) -> Self {
        self.model = Some(label.into());
        self
    }
    pub fn profiles_path(mut self, path: PathBuf) -> Self {
        self.profiles_path = Some(path);
        self
    }
    pub fn database_path(mut self, path: PathBuf) -> Self {
        self.database_path = Some(path);
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let profile = self
            .profile
            .ok_or(ConfigError::MissingParameter("profile"))?;
        if profile.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "profile",
                reason: "profile name must not be empty".to_string(),
            });
        }

        Ok(GeneratorConfig {
            profile,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            profiles_path: self.profiles_path,
            database_path: self.database_path,
        })
    }
}

/// Settings for the crystallization detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Relative violation below which plain structures decompose cleanly.
    pub violation_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            violation_threshold: DEFAULT_VIOLATION_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    pub fn detector(&self) -> CrystallizationDetector {
        CrystallizationDetector::new(self.violation_threshold)
    }
}

#[derive(Default)]
pub struct DetectorConfigBuilder {
    violation_threshold: Option<f64>,
}

impl DetectorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violation_threshold(mut self, threshold: f64) -> Self {
        self.violation_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<DetectorConfig, ConfigError> {
        let violation_threshold = self
            .violation_threshold
            .unwrap_or(DEFAULT_VIOLATION_THRESHOLD);
        if !violation_threshold.is_finite() || violation_threshold <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "violation_threshold",
                reason: format!("must be finite and positive, got {violation_threshold}"),
            });
        }
        Ok(DetectorConfig {
            violation_threshold,
        })
    }
}
