use super::config::ConfigError;
use crate::core::confidence::ConfidenceLoadError;
use crate::core::crystallization::graph::StructureError;
use crate::core::reference::database::DatabaseLoadError;
use crate::core::theory::TheoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Confidence profile error: {source}")]
    Confidence {
        #[from]
        source: ConfidenceLoadError,
    },

    #[error("Element database error: {source}")]
    Database {
        #[from]
        source: DatabaseLoadError,
    },

    #[error(transparent)]
    Theory(#[from] TheoryError),

    #[error("Invalid structure: {source}")]
    Structure {
        #[from]
        source: StructureError,
    },
}
