//! # Confidence Module
//!
//! Scores how far a derived property can be trusted, as a function of how far
//! the atomic number lies from experimentally validated territory.
//!
//! ## Key Components
//!
//! - [`Property`] - Closed set of tracked properties
//! - [`ConfidenceTable`] - Range-keyed profile document, loaded once and shared
//! - [`ConfidenceModel`] - Read-only view of one named profile
//!
//! The table is immutable after load. A model holds an `Arc` into it, so any
//! number of threads may query scores without synchronization.

mod model;
mod profile;
mod property;

pub use model::{ConfidenceModel, Modifiers};
pub use profile::{ConfidenceLoadError, ConfidenceTable, Profile, ZRange};
pub use property::Property;
