//! # Core Module
//!
//! Fundamental data structures and pure algorithms of Elementa. Nothing in this
//! module performs I/O during a computation; loaders for the confidence profile
//! document and the element database run once, before any core object is built.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - `Element`, `ElementStatus`, `BondPrediction`
//! - **Electronic Structure** ([`theory`]) - Madelung filling, exception table,
//!   valence and block derivation, systematic naming, electronegativity estimates
//! - **Reliability** ([`confidence`]) - Range-keyed confidence profiles
//! - **Reference Data** ([`reference`]) - Bundled periodic table and the loadable
//!   element database
//! - **Composition** ([`bonding`]) - Pairwise bond rules with confidence propagation
//! - **Boundary Detection** ([`crystallization`]) - Additivity violation measurement
//!   on any node/edge substrate
//!
//! Data flows strictly downward: atomic number, configuration, element, bond.
//! The crystallization detector is independent of the element pipeline.

pub mod bonding;
pub mod confidence;
pub mod crystallization;
pub mod models;
pub mod reference;
pub mod theory;
