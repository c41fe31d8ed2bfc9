use super::stability::stability_score;
use crate::core::confidence::Property;
use crate::core::models::bond::{BondCharacter, BondPrediction, bond_symbol};
use crate::core::models::element::Element;
use std::collections::BTreeMap;
use tracing::trace;

const NONPOLAR_LIMIT: f64 = 0.5;
const IONIC_THRESHOLD: f64 = 1.7;
const MAX_BOND_ORDER: u32 = 3;
const OXYGEN: u32 = 8;
const OCTET_SLACK: u32 = 2;

/// Element properties a bond prediction depends on.
const CONSULTED_PROPERTIES: [Property; 2] =
    [Property::ElectronConfiguration, Property::Electronegativity];

pub fn is_noble_gas(element: &Element) -> bool {
    element.is_noble_gas()
}

/// Classifies the bond from the electronegativity difference.
///
/// Returns [`BondCharacter::Unknown`] when either electronegativity is absent.
pub fn classify_bond_character(a: &Element, b: &Element) -> BondCharacter {
    match electronegativity_difference(a, b) {
        Some(delta) if delta < NONPOLAR_LIMIT => BondCharacter::NonpolarCovalent,
        Some(delta) if delta < IONIC_THRESHOLD => BondCharacter::PolarCovalent,
        Some(_) => BondCharacter::Ionic,
        None => BondCharacter::Unknown,
    }
}

fn electronegativity_difference(a: &Element, b: &Element) -> Option<f64> {
    Some((a.electronegativity? - b.electronegativity?).abs())
}

fn valence_target(element: &Element) -> u32 {
    if element.atomic_number <= 2 { 2 } else { 8 }
}

fn has_room(element: &Element) -> bool {
    element.valence_electrons < valence_target(element)
}

/// Both atoms still need electrons to complete their shell.
pub fn satisfies_octet(a: &Element, b: &Element) -> bool {
    has_room(a) && has_room(b)
}

/// Both atoms need electrons, and sharing `order` pairs overshoots neither
/// shell by more than two electrons.
pub fn satisfies_octet_with_order(a: &Element, b: &Element, order: u8) -> bool {
    let fits = |element: &Element| {
        element.valence_electrons + u32::from(order) <= valence_target(element) + OCTET_SLACK
    };
    satisfies_octet(a, b) && fits(a) && fits(b)
}

/// Highest bond order the pair can form.
///
/// Bounded by both valence counts and by 3. Hydrogen has no π-capable orbitals
/// and O–O has no stable triple bond.
pub fn max_bond_order(a: &Element, b: &Element) -> u8 {
    let mut max = a.valence_electrons.min(b.valence_electrons).min(MAX_BOND_ORDER);
    if a.is_hydrogen() || b.is_hydrogen() {
        max = max.min(1);
    }
    if a.atomic_number == OXYGEN && b.atomic_number == OXYGEN {
        max = max.min(2);
    }
    // Bounded by MAX_BOND_ORDER above.
    max as u8
}

/// Weakest-link confidence over the properties consulted for a bond.
///
/// Each breakdown entry is the smaller of the two elements' confidences for
/// that property; the overall value is the smallest entry.
pub fn propagate_confidence(a: &Element, b: &Element) -> (f64, BTreeMap<String, f64>) {
    let breakdown: BTreeMap<String, f64> = CONSULTED_PROPERTIES
        .into_iter()
        .map(|property| {
            let weakest = a.confidence_of(property).min(b.confidence_of(property));
            (property.as_str().to_string(), weakest)
        })
        .collect();
    let overall = breakdown.values().copied().fold(1.0, f64::min);
    (overall, breakdown)
}

/// Order of the most stable candidate; ties go to the lowest order.
///
/// Returns 1 when there are no candidates.
pub fn most_likely_order(candidates: &[BondPrediction]) -> u8 {
    candidates
        .iter()
        .fold(None::<&BondPrediction>, |best, candidate| match best {
            Some(current) if current.stability >= candidate.stability => Some(current),
            _ => Some(candidate),
        })
        .map_or(1, |best| best.order)
}

fn bond_label(a: &Element, b: &Element, order: u8) -> String {
    let symbol = bond_symbol(order).unwrap_or('?');
    format!("{}{symbol}{}", a.symbol, b.symbol)
}

/// Stateless rule engine turning element pairs into bond predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondRuleEngine;

impl BondRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Predicts the most likely bond between `a` and `b`.
    pub fn predict(&self, a: &Element, b: &Element) -> BondPrediction {
        if let Some(gated) = gate(a, b) {
            return gated;
        }
        let Some(delta) = electronegativity_difference(a, b) else {
            return unknown_prediction();
        };

        let order = if a.is_hydrogen() || b.is_hydrogen() {
            1
        } else {
            most_likely_order(&self.predict_all_orders(a, b))
        };
        let character = classify_bond_character(a, b);
        let stability = stability_score(a, b, order, character);
        let (confidence, confidence_breakdown) = propagate_confidence(a, b);

        let reasoning = format!(
            "{}: ΔEN={delta:.2} → {character}, valence: {}({}) {}({})",
            bond_label(a, b, order),
            a.symbol,
            a.valence_electrons,
            b.symbol,
            b.valence_electrons
        );

        BondPrediction {
            can_bond: Some(satisfies_octet(a, b)),
            character,
            order,
            stability,
            confidence,
            confidence_breakdown,
            reasoning,
        }
    }

    /// One prediction per admissible bond order, in ascending order.
    ///
    /// Gated pairs (noble gas or missing data) yield their single gate
    /// prediction. A pair with no admissible order yields an empty list.
    pub fn predict_all_orders(&self, a: &Element, b: &Element) -> Vec<BondPrediction> {
        if let Some(gated) = gate(a, b) {
            return vec![gated];
        }
        let Some(delta) = electronegativity_difference(a, b) else {
            return vec![unknown_prediction()];
        };

        let character = classify_bond_character(a, b);
        let (confidence, confidence_breakdown) = propagate_confidence(a, b);

        (1..=max_bond_order(a, b))
            .map(|order| {
                let stability = stability_score(a, b, order, character);
                let can_bond = satisfies_octet_with_order(a, b, order);
                trace!(
                    pair = %bond_label(a, b, order),
                    order,
                    stability,
                    can_bond,
                    "Evaluated bond order."
                );
                BondPrediction {
                    can_bond: Some(can_bond),
                    character,
                    order,
                    stability,
                    confidence,
                    confidence_breakdown: confidence_breakdown.clone(),
                    reasoning: format!(
                        "{}: ΔEN={delta:.2} → {character}, order={order}, stability={stability:.2}",
                        bond_label(a, b, order)
                    ),
                }
            })
            .collect()
    }
}

fn gate(a: &Element, b: &Element) -> Option<BondPrediction> {
    [a, b]
        .into_iter()
        .find(|element| is_noble_gas(element))
        .map(noble_gas_prediction)
}

fn noble_gas_prediction(inert: &Element) -> BondPrediction {
    BondPrediction {
        can_bond: Some(false),
        character: BondCharacter::None,
        order: 0,
        stability: 1.0,
        confidence: 1.0,
        confidence_breakdown: BTreeMap::from([("valence".to_string(), 1.0)]),
        reasoning: format!("{} is a noble gas (full valence shell)", inert.symbol),
    }
}

fn unknown_prediction() -> BondPrediction {
    BondPrediction {
        can_bond: None,
        character: BondCharacter::Unknown,
        order: 0,
        stability: 0.0,
        confidence: 0.0,
        confidence_breakdown: BTreeMap::new(),
        reasoning: "Electronegativity data unavailable".to_string(),
    }
}
