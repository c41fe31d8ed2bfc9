use super::profile::{ConfidenceLoadError, ConfidenceTable, Profile};
use super::property::Property;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

const MAGIC_NEUTRON_NUMBER: u32 = 184;
const ISLAND_HALF_WIDTH: u32 = 5;
const FAR_FROM_MAGIC: u32 = 20;

const MODEL_AGREEMENT_BONUS: &str = "model_agreement_bonus";
const MODEL_DISAGREEMENT_PENALTY: &str = "model_disagreement_penalty";
const ISLAND_OF_STABILITY_BONUS: &str = "island_of_stability_bonus";
const FAR_FROM_MAGIC_PENALTY: &str = "far_from_magic_numbers_penalty";

/// Optional inputs that adjust a base confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Whether independent theoretical models agree on the configuration.
    pub models_agree: Option<bool>,
    /// Neutron count of the isotope whose half-life is scored.
    pub neutrons: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ConfidenceModel {
    profile: Arc<Profile>,
    profile_name: String,
    version: String,
}

impl ConfidenceModel {
    pub fn new(table: &ConfidenceTable, profile: &str) -> Result<Self, ConfidenceLoadError> {
        Ok(Self {
            profile: table.profile(profile)?,
            profile_name: profile.to_string(),
            version: table.version().to_string(),
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Confidence in `property` at atomic number `z`, clamped to `[0, 1]`.
    ///
    /// Returns 0 when no range contains `z`. Modifiers only affect the
    /// properties they are defined for: `models_agree` the electron
    /// configuration, `neutrons` the half-life.
    pub fn confidence_for(&self, property: Property, z: u32, modifiers: Modifiers) -> f64 {
        let Some((_, range)) = self.profile.range_for(z) else {
            return 0.0;
        };
        let mut score = range.confidence.get(&property).copied().unwrap_or(0.0);

        match property {
            Property::ElectronConfiguration => {
                if let Some(agree) = modifiers.models_agree {
                    let name = if agree {
                        MODEL_AGREEMENT_BONUS
                    } else {
                        MODEL_DISAGREEMENT_PENALTY
                    };
                    score += self.delta(property, name);
                }
            }
            Property::HalfLife => {
                if let Some(n) = modifiers.neutrons {
                    let distance = n.abs_diff(MAGIC_NEUTRON_NUMBER);
                    if distance <= ISLAND_HALF_WIDTH {
                        score += self.delta(property, ISLAND_OF_STABILITY_BONUS);
                    } else if distance > FAR_FROM_MAGIC {
                        score += self.delta(property, FAR_FROM_MAGIC_PENALTY);
                    }
                }
            }
            _ => {}
        }

        score.clamp(0.0, 1.0)
    }

    fn delta(&self, property: Property, name: &str) -> f64 {
        self.profile.modifier(property, name).unwrap_or_else(|| {
            warn!(
                profile = %self.profile_name,
                property = %property,
                modifier = name,
                "Confidence modifier missing from profile; treating as 0."
            );
            0.0
        })
    }

    pub fn electron_configuration(&self, z: u32, models_agree: Option<bool>) -> f64 {
        let modifiers = Modifiers {
            models_agree,
            ..Modifiers::default()
        };
        self.confidence_for(Property::ElectronConfiguration, z, modifiers)
    }

    pub fn atomic_radius(&self, z: u32) -> f64 {
        self.confidence_for(Property::AtomicRadius, z, Modifiers::default())
    }

    pub fn electronegativity(&self, z: u32) -> f64 {
        self.confidence_for(Property::Electronegativity, z, Modifiers::default())
    }

    pub fn ionization_energy(&self, z: u32) -> f64 {
        self.confidence_for(Property::IonizationEnergy, z, Modifiers::default())
    }

    pub fn oxidation_states(&self, z: u32) -> f64 {
        self.confidence_for(Property::OxidationStates, z, Modifiers::default())
    }

    pub fn half_life(&self, z: u32, neutrons: Option<u32>) -> f64 {
        let modifiers = Modifiers {
            neutrons,
            ..Modifiers::default()
        };
        self.confidence_for(Property::HalfLife, z, modifiers)
    }

    /// Every tracked property scored in one call.
    pub fn all_confidences(&self, z: u32, neutrons: Option<u32>) -> BTreeMap<Property, f64> {
        Property::ALL
            .into_iter()
            .map(|property| {
                let modifiers = Modifiers {
                    models_agree: None,
                    neutrons,
                };
                (property, self.confidence_for(property, z, modifiers))
            })
            .collect()
    }
}

impl fmt::Display for ConfidenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConfidenceModel(profile='{}', version={})",
            self.profile_name, self.version
        )
    }
}
