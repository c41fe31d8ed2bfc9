//! # Elementa Core Library
//!
//! Rule-based prediction of atomic, bonding and composite-structure properties,
//! including elements beyond the experimentally confirmed periodic table. Every
//! derived value carries a confidence score describing how far its input lies
//! from experimentally validated territory.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Element`, `BondPrediction`),
//!   pure algorithms (orbital filling, confidence lookup, bond rules) and the
//!   domain-agnostic `CrystallizationDetector`.
//!
//! - **[`engine`]: The Orchestration Layer.** Builder-validated configuration, the
//!   `ElementGenerator` that assembles elements from the leaf algorithms, progress
//!   reporting and batch tasks such as the parallel pairwise bond table.
//!
//! - **[`workflows`]: The Public API.** Thin, user-facing entry points that tie
//!   `core` and `engine` together: configuration filling, element generation,
//!   bond prediction, additivity measurement and whole-range surveys.

pub mod core;
pub mod engine;
pub mod workflows;
