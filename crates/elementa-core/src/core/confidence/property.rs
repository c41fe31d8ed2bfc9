use serde::{Deserialize, Serialize};
use std::fmt;

/// A property whose confidence the model tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    ElectronConfiguration,
    AtomicRadius,
    Electronegativity,
    IonizationEnergy,
    OxidationStates,
    HalfLife,
}

impl Property {
    pub const ALL: [Self; 6] = [
        Self::ElectronConfiguration,
        Self::AtomicRadius,
        Self::Electronegativity,
        Self::IonizationEnergy,
        Self::OxidationStates,
        Self::HalfLife,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ElectronConfiguration => "electron_configuration",
            Self::AtomicRadius => "atomic_radius",
            Self::Electronegativity => "electronegativity",
            Self::IonizationEnergy => "ionization_energy",
            Self::OxidationStates => "oxidation_states",
            Self::HalfLife => "half_life",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
