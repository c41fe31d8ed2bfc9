use crate::core::bonding::BondRuleEngine;
use crate::core::crystallization::detector::AdditivityViolation;
use crate::core::crystallization::graph::Substrate;
use crate::core::models::bond::BondPrediction;
use crate::core::models::element::Element;
use crate::core::theory::TheoryError;
use crate::core::theory::orbitals;
use crate::engine::config::DetectorConfig;
use crate::engine::generator::ElementGenerator;
use tracing::{info, instrument};

/// Ground-state configuration of element `z` (1–173).
pub fn fill_configuration(z: u32, compact: bool) -> Result<String, TheoryError> {
    orbitals::fill(z, compact)
}

/// Generates element `z` (1–200).
pub fn generate_element(generator: &ElementGenerator, z: u32) -> Result<Element, TheoryError> {
    generator.generate(z)
}

pub fn predict_bond(a: &Element, b: &Element) -> BondPrediction {
    BondRuleEngine::new().predict(a, b)
}

pub fn predict_all_bond_orders(a: &Element, b: &Element) -> Vec<BondPrediction> {
    BondRuleEngine::new().predict_all_orders(a, b)
}

/// Compares `naive_fn(structure)` against `actual` and classifies the result.
#[instrument(skip_all, name = "additivity_workflow")]
pub fn measure_additivity_violation<S, F>(
    structure: &S,
    naive_fn: F,
    actual: f64,
    confidence: f64,
    config: &DetectorConfig,
) -> AdditivityViolation
where
    S: Substrate + ?Sized,
    F: FnOnce(&S) -> f64,
{
    let result = config
        .detector()
        .measure(structure, naive_fn, actual, confidence);
    info!(
        violation = result.violation,
        relative = result.relative_violation,
        classification = %result.classification,
        "Additivity measured."
    );
    result
}
