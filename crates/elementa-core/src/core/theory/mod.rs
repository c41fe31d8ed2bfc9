//! # Theory Module
//!
//! Pure, physics-motivated derivations that turn an atomic number into the
//! electronic description of an element.
//!
//! ## Key Components
//!
//! - [`orbitals`] - Madelung (n + l) filling, compact notation, valence and block
//! - [`exceptions`] - Static table of empirical exceptions to idealized filling
//! - [`naming`] - IUPAC systematic names and symbols
//! - [`electronegativity`] - Valence-based Pauling electronegativity extrapolation
//!
//! ## Usage
//!
//! ```
//! use elementa::core::theory::orbitals::fill;
//!
//! assert_eq!(fill(6, true).unwrap(), "[He] 2s2 2p2");
//! assert_eq!(fill(24, true).unwrap(), "[Ar] 3d5 4s1");
//! ```

pub mod electronegativity;
pub mod error;
pub mod exceptions;
pub mod naming;
pub mod orbitals;

pub use error::TheoryError;
