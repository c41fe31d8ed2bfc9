//! # Crystallization Module
//!
//! Domain-agnostic detection of compositional boundaries. A structure
//! "crystallizes" when its measured value diverges far enough from a naive
//! sum over its parts that it must be cached whole instead of decomposed.
//!
//! ## Key Components
//!
//! - [`graph`] - The `Substrate` and `GraphLike` capabilities, plus the
//!   concrete `MolecularGraph`
//! - [`energy`] - Reference bond-energy table for localized naive sums
//! - [`features`] - Topological feature extraction
//! - [`symmetry`] - Swappable symmetry-order estimation
//! - [`detector`] - `CrystallizationDetector` and its `AdditivityViolation` result
//!
//! ## Usage
//!
//! ```
//! use elementa::core::crystallization::detector::{Classification, CrystallizationDetector};
//! use elementa::core::crystallization::graph::Opaque;
//!
//! let detector = CrystallizationDetector::default();
//! let result = detector.measure(&Opaque, |_| 100.0, 101.0, 1.0);
//! assert_eq!(result.classification, Classification::DecomposesCleanly);
//! ```

pub mod detector;
pub mod energy;
pub mod features;
pub mod graph;
pub mod symmetry;
