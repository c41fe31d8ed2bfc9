//! # Engine Module
//!
//! Orchestration on top of the pure `core` algorithms.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Builder-validated generator and detector settings
//! - **Element Generation** ([`generator`]) - Assembles `Element` records from the
//!   filling engine, the confidence model and the reference database
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - `EngineError`, aggregating every layer's errors
//! - **Batch Tasks** ([`tasks`]) - Parallel pairwise bond tables
//!
//! Reference data is loaded once when a generator is constructed. Every later
//! call is pure and safe to run from any number of threads.

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod tasks;
