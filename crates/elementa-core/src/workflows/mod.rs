//! # Workflows Module
//!
//! User-facing entry points tying `core` and `engine` together.
//!
//! ## Architecture
//!
//! - **Single predictions** ([`predict`]) - Configuration filling, element
//!   generation, bond prediction and additivity measurement
//! - **Survey** ([`survey`]) - Generates a range of elements and their full
//!   pairwise bond table, with a summary of the outcomes
//!
//! ## Usage
//!
//! ```
//! use elementa::engine::config::GeneratorConfigBuilder;
//! use elementa::engine::generator::ElementGenerator;
//! use elementa::workflows::predict;
//!
//! let config = GeneratorConfigBuilder::new().profile("default").build().unwrap();
//! let generator = ElementGenerator::new(&config).unwrap();
//!
//! let carbon = predict::generate_element(&generator, 6).unwrap();
//! let oxygen = predict::generate_element(&generator, 8).unwrap();
//! let bond = predict::predict_bond(&carbon, &oxygen);
//! assert_eq!(bond.order, 2);
//! ```

pub mod predict;
pub mod survey;
