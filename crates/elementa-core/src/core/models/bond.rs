use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Confidence at or above which a prediction counts as reliable by default.
pub const DEFAULT_RELIABILITY_THRESHOLD: f64 = 0.5;

/// Bond character on the Pauling electronegativity-difference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BondCharacter {
    /// ΔEN below 0.5: electrons shared evenly.
    NonpolarCovalent,
    /// ΔEN from 0.5 up to 1.7: electrons shared unevenly.
    PolarCovalent,
    /// ΔEN of 1.7 or more: electron transfer.
    Ionic,
    /// At least one participant is inert.
    None,
    /// Required inputs are missing.
    Unknown,
}

impl BondCharacter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonpolarCovalent => "nonpolar_covalent",
            Self::PolarCovalent => "polar_covalent",
            Self::Ionic => "ionic",
            Self::None => "none",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_covalent(self) -> bool {
        matches!(self, Self::NonpolarCovalent | Self::PolarCovalent)
    }
}

impl fmt::Display for BondCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conventional symbol for a bond order: `-`, `=` or `≡`.
pub fn bond_symbol(order: u8) -> Option<char> {
    match order {
        1 => Some('-'),
        2 => Some('='),
        3 => Some('≡'),
        _ => None,
    }
}

/// Predicted bond between two elements.
///
/// Predictions are derived per pair and carry their own confidence, the
/// minimum over every element property consulted to produce them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondPrediction {
    /// `Some(true)` if both atoms have room to bond, `None` when unknown.
    pub can_bond: Option<bool>,
    /// Electronegativity-difference classification.
    pub character: BondCharacter,
    /// Bond order, 0 for no bond or an unknown outcome, otherwise 1–3.
    pub order: u8,
    /// Heuristic stability score in `[0, 1]`.
    pub stability: f64,
    /// Overall confidence: the weakest entry of `confidence_breakdown`.
    pub confidence: f64,
    /// Per-property confidence, each the minimum over both elements.
    pub confidence_breakdown: BTreeMap<String, f64>,
    /// Human-readable justification.
    pub reasoning: String,
}

impl BondPrediction {
    pub fn is_reliable(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

impl fmt::Display for BondPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let can_bond = match self.can_bond {
            Some(true) => "true",
            Some(false) => "false",
            None => "unknown",
        };
        write!(f, "BondPrediction(can_bond={can_bond}, order={}", self.order)?;
        if let Some(symbol) = bond_symbol(self.order) {
            write!(f, "{symbol}")?;
        }
        write!(
            f,
            ", type='{}', stability={:.2}, confidence={:.2})",
            self.character, self.stability, self.confidence
        )
    }
}
