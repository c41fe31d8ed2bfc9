use super::config::GeneratorConfig;
use super::error::EngineError;
use crate::core::confidence::{ConfidenceModel, ConfidenceTable};
use crate::core::models::element::{Block, Element, ElementStatus};
use crate::core::reference::database::ElementDatabase;
use crate::core::reference::periodic_table::OBSERVED_ELEMENTS;
use crate::core::theory::TheoryError;
use crate::core::theory::electronegativity::{self, is_closed_shell};
use crate::core::theory::naming::systematic_name;
use crate::core::theory::orbitals::{
    ElectronConfiguration, MAX_FILL_Z, block_of, period_of, valence_electron_count,
};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const MIN_GENERATE_Z: u32 = 1;
pub const MAX_GENERATE_Z: u32 = 200;

/// Builds immutable [`Element`] records from an atomic number.
///
/// Reference data is resolved at construction; [`generate`](Self::generate)
/// itself performs no I/O.
#[derive(Debug, Clone)]
pub struct ElementGenerator {
    confidence: ConfidenceModel,
    database: Arc<ElementDatabase>,
    model: String,
}

impl ElementGenerator {
    /// Loads the configured profile table and element database.
    pub fn new(config: &GeneratorConfig) -> Result<Self, EngineError> {
        let table = match &config.profiles_path {
            Some(path) => ConfidenceTable::load(path)?,
            None => ConfidenceTable::bundled()?,
        };
        let database = match &config.database_path {
            Some(path) => ElementDatabase::load(path)?,
            None => ElementDatabase::bundled(),
        };
        let confidence = ConfidenceModel::new(&table, &config.profile)?;

        info!(
            profile = %config.profile,
            model = %config.model,
            database_entries = database.len(),
            "Element generator ready."
        );
        Ok(Self::from_parts(
            confidence,
            Arc::new(database),
            config.model.clone(),
        ))
    }

    /// Generator over already-loaded reference data.
    pub fn from_parts(
        confidence: ConfidenceModel,
        database: Arc<ElementDatabase>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            confidence,
            database,
            model: model.into(),
        }
    }

    pub fn confidence_model(&self) -> &ConfidenceModel {
        &self.confidence
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates element `z`.
    ///
    /// # Errors
    ///
    /// Returns [`TheoryError::AtomicNumberOutOfRange`] outside `1..=200`.
    pub fn generate(&self, z: u32) -> Result<Element, TheoryError> {
        TheoryError::check_range(z, MIN_GENERATE_Z, MAX_GENERATE_Z)?;

        // Exceptions and the filling contract stop at 173; beyond it only the
        // idealized order is meaningful.
        let configuration = if z <= MAX_FILL_Z {
            ElectronConfiguration::ground_state(z)?
        } else {
            ElectronConfiguration::madelung(z)
        };
        let compact = configuration.compact(z);
        let valence_electrons = valence_electron_count(&compact);

        let (symbol, name) = self.identify(z);
        let electronegativity = self.electronegativity(z, valence_electrons);

        let element = Element {
            atomic_number: z,
            symbol,
            name,
            electron_configuration: compact.to_string(),
            valence_electrons,
            block: Block::from(block_of(&compact)),
            period: period_of(&compact),
            status: ElementStatus::from_atomic_number(z),
            confidence: self.confidence.all_confidences(z, None),
            electronegativity,
            group: None,
            atomic_radius: None,
            ionization_energy: None,
            oxidation_states: None,
            half_life: None,
            most_stable_isotope: None,
        };

        debug!(
            z,
            symbol = %element.symbol,
            configuration = %element.electron_configuration,
            status = %element.status,
            "Generated element."
        );
        Ok(element)
    }

    /// Generates every element in `range`, failing on the first invalid number.
    pub fn generate_range(
        &self,
        range: RangeInclusive<u32>,
    ) -> Result<Vec<Element>, TheoryError> {
        range.map(|z| self.generate(z)).collect()
    }

    fn identify(&self, z: u32) -> (String, String) {
        if z <= OBSERVED_ELEMENTS {
            if let Some(record) = self.database.get(z) {
                return (record.symbol.clone(), record.name.clone());
            }
            warn!(z, "No database entry for observed element; using systematic name.");
        }
        systematic_name(z)
    }

    fn electronegativity(&self, z: u32, valence_electrons: u32) -> Option<f64> {
        if is_closed_shell(z, valence_electrons) {
            return None;
        }
        let reference = if z <= OBSERVED_ELEMENTS {
            self.database
                .get(z)
                .and_then(|record| record.electronegativity)
        } else {
            None
        };
        reference.or_else(|| electronegativity::extrapolate(z, valence_electrons))
    }
}

impl fmt::Display for ElementGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ElementGenerator(model='{}', confidence={})",
            self.model, self.confidence
        )
    }
}
