use crate::core::confidence::Property;
use crate::core::theory::orbitals::Subshell;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Upper atomic number of each status category, in ascending order.
const OBSERVED_MAX: u32 = 118;
const SYNTHESIS_PLANNED_MAX: u32 = 120;
const PREDICTED_MAX: u32 = 137;
const SUPERCRITICAL_MAX: u32 = 172;

/// How far an element lies from experimentally validated territory.
///
/// The category is determined solely by atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    /// Synthesized and characterized (Z ≤ 118).
    Observed,
    /// Synthesis attempts are planned or underway (Z = 119–120).
    SynthesisPlanned,
    /// Only theoretical predictions exist (Z = 121–137).
    Predicted,
    /// Nuclear charge exceeds the critical value for 1s stability (Z = 138–172).
    Supercritical,
    /// Beyond the QED limit; treated as physically impossible (Z ≥ 173).
    Impossible,
}

impl ElementStatus {
    pub fn from_atomic_number(z: u32) -> Self {
        if z <= OBSERVED_MAX {
            Self::Observed
        } else if z <= SYNTHESIS_PLANNED_MAX {
            Self::SynthesisPlanned
        } else if z <= PREDICTED_MAX {
            Self::Predicted
        } else if z <= SUPERCRITICAL_MAX {
            Self::Supercritical
        } else {
            Self::Impossible
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observed => "observed",
            Self::SynthesisPlanned => "synthesis_planned",
            Self::Predicted => "predicted",
            Self::Supercritical => "supercritical",
            Self::Impossible => "impossible",
        }
    }
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Periodic-table block, named after the last orbital filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
    G,
}

impl From<Subshell> for Block {
    fn from(subshell: Subshell) -> Self {
        match subshell {
            Subshell::S => Self::S,
            Subshell::P => Self::P,
            Subshell::D => Self::D,
            Subshell::F => Self::F,
            Subshell::G => Self::G,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
            Self::G => 'g',
        };
        write!(f, "{letter}")
    }
}

/// A fully derived chemical element.
///
/// Elements are created once by the generator and never mutated afterwards.
/// Every populated property has a matching entry in `confidence`; optional
/// scalars stay `None` when no estimate exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Atomic number, 1–200.
    pub atomic_number: u32,
    /// Element symbol, standard or IUPAC systematic (e.g. "C", "Ubn").
    pub symbol: String,
    /// Element name, standard or IUPAC systematic (e.g. "Carbon", "Unbinilium").
    pub name: String,
    /// Ground-state configuration in noble-gas-core notation.
    pub electron_configuration: String,
    /// Electrons in the outermost s/p shell; 0 when that shell holds only d or f.
    pub valence_electrons: u32,
    /// Periodic block of the last orbital in the configuration.
    pub block: Block,
    /// Periodic-table row.
    pub period: u8,
    /// Distance from experimentally validated territory.
    pub status: ElementStatus,
    /// Confidence score in `[0, 1]` for every tracked property.
    pub confidence: BTreeMap<Property, f64>,
    /// Pauling electronegativity; undefined for noble gases.
    pub electronegativity: Option<f64>,
    /// Periodic group, when an estimator supplies one.
    pub group: Option<u32>,
    /// Atomic radius in picometres.
    pub atomic_radius: Option<f64>,
    /// First ionization energy in eV.
    pub ionization_energy: Option<f64>,
    /// Accessible oxidation states.
    pub oxidation_states: Option<Vec<i32>>,
    /// Half-life of the most stable isotope, in seconds.
    pub half_life: Option<f64>,
    /// Mass number of the most stable isotope.
    pub most_stable_isotope: Option<u32>,
}

impl Element {
    /// Closed valence shell: eight electrons, or two for hydrogen and helium.
    pub fn is_noble_gas(&self) -> bool {
        self.valence_electrons == 8 || (self.valence_electrons == 2 && self.atomic_number <= 2)
    }

    pub fn is_hydrogen(&self) -> bool {
        self.atomic_number == 1
    }

    /// Confidence for `property`, 0 when it was never scored.
    pub fn confidence_of(&self, property: Property) -> f64 {
        self.confidence.get(&property).copied().unwrap_or(0.0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, Z={})",
            self.name, self.symbol, self.atomic_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(z: u32, symbol: &str, valence: u32) -> Element {
        Element {
            atomic_number: z,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            electron_configuration: String::new(),
            valence_electrons: valence,
            block: Block::S,
            period: 1,
            status: ElementStatus::from_atomic_number(z),
            confidence: BTreeMap::new(),
            electronegativity: None,
            group: None,
            atomic_radius: None,
            ionization_energy: None,
            oxidation_states: None,
            half_life: None,
            most_stable_isotope: None,
        }
    }

    #[test]
    fn status_thresholds_match_category_boundaries() {
        let cases = [
            (1, ElementStatus::Observed),
            (118, ElementStatus::Observed),
            (119, ElementStatus::SynthesisPlanned),
            (120, ElementStatus::SynthesisPlanned),
            (121, ElementStatus::Predicted),
            (137, ElementStatus::Predicted),
            (138, ElementStatus::Supercritical),
            (172, ElementStatus::Supercritical),
            (173, ElementStatus::Impossible),
            (200, ElementStatus::Impossible),
        ];
        for (z, expected) in cases {
            assert_eq!(ElementStatus::from_atomic_number(z), expected, "Z={z}");
        }
    }

    #[test]
    fn status_display_uses_snake_case() {
        assert_eq!(ElementStatus::SynthesisPlanned.to_string(), "synthesis_planned");
        assert_eq!(ElementStatus::Impossible.to_string(), "impossible");
    }

    #[test]
    fn block_converts_from_subshell() {
        assert_eq!(Block::from(Subshell::G), Block::G);
        assert_eq!(Block::from(Subshell::D).to_string(), "d");
    }

    #[test]
    fn noble_gas_detection_handles_first_period() {
        assert!(element(2, "He", 2).is_noble_gas());
        assert!(element(10, "Ne", 8).is_noble_gas());
        assert!(!element(4, "Be", 2).is_noble_gas());
        assert!(!element(1, "H", 1).is_noble_gas());
    }

    #[test]
    fn display_shows_name_symbol_and_number() {
        let mut carbon = element(6, "C", 4);
        carbon.name = "Carbon".to_string();
        assert_eq!(carbon.to_string(), "Carbon (C, Z=6)");
    }

    #[test]
    fn missing_confidence_reads_as_zero() {
        let mut carbon = element(6, "C", 4);
        carbon.confidence.insert(Property::Electronegativity, 0.95);
        assert_eq!(carbon.confidence_of(Property::Electronegativity), 0.95);
        assert_eq!(carbon.confidence_of(Property::HalfLife), 0.0);
    }
}
