//! # Core Models Module
//!
//! Immutable records produced by the prediction pipeline.
//!
//! ## Overview
//!
//! - **Elements** are built once per request by the element generator and are
//!   then shared read-only across any number of bond computations.
//! - **Bond predictions** are derived fresh for every element pair and never
//!   belong to either element.
//!
//! ## Key Components
//!
//! - [`element`] - `Element`, its `ElementStatus` category and periodic `Block`
//! - [`bond`] - `BondPrediction` and the `BondCharacter` classification
//!
//! ## Usage
//!
//! ```ignore
//! use elementa::workflows::predict;
//!
//! let carbon = predict::generate_element(&generator, 6)?;
//! let oxygen = predict::generate_element(&generator, 8)?;
//! let bond = predict::predict_bond(&carbon, &oxygen);
//! println!("{bond}");
//! ```

pub mod bond;
pub mod element;
