//! # Bonding Module
//!
//! Composes two generated elements into bond predictions: whether they bond,
//! the bond character, admissible bond orders and a stability score per order.
//!
//! ## Rules
//!
//! Applied in order by [`rules::BondRuleEngine`]:
//!
//! 1. Noble-gas gate - inert participants never bond.
//! 2. Data gate - missing electronegativity yields an unknown prediction.
//! 3. Character from ΔEN (0.5 and 1.7 thresholds on the Pauling scale).
//! 4. Octet room check on both participants.
//! 5. Order enumeration, capped by valence, hydrogen and the O–O pair.
//! 6. Stability scoring from [`stability`].
//! 7. Weakest-link confidence over the element properties consulted.

pub mod rules;
pub mod stability;

pub use rules::BondRuleEngine;
