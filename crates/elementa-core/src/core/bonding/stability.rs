use crate::core::models::bond::BondCharacter;
use crate::core::models::element::Element;
use crate::core::reference::periodic_table;
use phf::{Map, phf_map};

/// Empirical stability for single, double and triple bonds of specific pairs.
///
/// Keys join the two symbols in ascending atomic-number order.
static PAIR_STABILITY: Map<&'static str, [f64; 3]> = phf_map! {
    "C-C" => [0.90, 0.88, 0.85],
    "H-C" => [0.92, 0.10, 0.10],
    "C-N" => [0.88, 0.86, 0.82],
    "C-O" => [0.85, 0.95, 0.20],
    "N-N" => [0.70, 0.80, 0.95],
    "N-O" => [0.82, 0.88, 0.60],
    "O-O" => [0.82, 0.92, 0.05],
};

const COVALENT_BASE: f64 = 0.85;
const IONIC_BASE: f64 = 0.80;
const IONIC_SINGLE: f64 = 0.90;
const IONIC_MULTIPLE: f64 = 0.20;
const OUT_OF_RANGE: f64 = 0.5;
const DOUBLE_FACTOR: f64 = 0.90;
const TRIPLE_FACTOR: f64 = 0.75;

pub fn base_stability(character: BondCharacter) -> f64 {
    match character {
        BondCharacter::NonpolarCovalent | BondCharacter::PolarCovalent => COVALENT_BASE,
        BondCharacter::Ionic => IONIC_BASE,
        BondCharacter::None | BondCharacter::Unknown => 0.0,
    }
}

fn pair_key(z_a: u32, z_b: u32) -> Option<String> {
    let (low, high) = if z_a <= z_b { (z_a, z_b) } else { (z_b, z_a) };
    let low = periodic_table::symbol(low)?;
    let high = periodic_table::symbol(high)?;
    Some(format!("{low}-{high}"))
}

/// Tabulated stabilities for the pair, if the pair has empirical overrides.
pub fn pair_stability(z_a: u32, z_b: u32) -> Option<&'static [f64; 3]> {
    pair_key(z_a, z_b).and_then(|key| PAIR_STABILITY.get(key.as_str()))
}

/// Stability score in `[0, 1]` for a bond of `order` between `a` and `b`.
///
/// Ionic bonds strongly prefer single bonds. Covalent pairs use the empirical
/// table when it has an entry, otherwise the base score decays with order.
pub fn stability_score(a: &Element, b: &Element, order: u8, character: BondCharacter) -> f64 {
    if character == BondCharacter::Ionic {
        return if order == 1 {
            IONIC_SINGLE
        } else {
            IONIC_MULTIPLE
        };
    }

    if let Some(scores) = pair_stability(a.atomic_number, b.atomic_number) {
        return match order {
            1..=3 => scores[usize::from(order) - 1],
            _ => OUT_OF_RANGE,
        };
    }

    let base = base_stability(character);
    match order {
        1 => base,
        2 => base * DOUBLE_FACTOR,
        3 => base * TRIPLE_FACTOR,
        _ => OUT_OF_RANGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::{Block, ElementStatus};
    use std::collections::BTreeMap;

    fn element(z: u32) -> Element {
        Element {
            atomic_number: z,
            symbol: periodic_table::symbol(z).unwrap_or("X").to_string(),
            name: String::new(),
            electron_configuration: String::new(),
            valence_electrons: 4,
            block: Block::P,
            period: 2,
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
    fn carbon_carbon_uses_empirical_table() {
        let c = element(6);
        let scores: Vec<f64> = (1..=3)
            .map(|order| stability_score(&c, &c, order, BondCharacter::NonpolarCovalent))
            .collect();
        assert_eq!(scores, vec![0.90, 0.88, 0.85]);
    }

    #[test]
    fn pair_lookup_is_symmetric() {
        assert_eq!(pair_stability(8, 6), pair_stability(6, 8));
        assert_eq!(pair_stability(6, 1), Some(&[0.92, 0.10, 0.10]));
        assert_eq!(pair_stability(8, 7), Some(&[0.82, 0.88, 0.60]));
    }

    #[test]
    fn carbonyl_double_bond_is_preferred() {
        let (c, o) = (element(6), element(8));
        let single = stability_score(&c, &o, 1, BondCharacter::PolarCovalent);
        let double = stability_score(&o, &c, 2, BondCharacter::PolarCovalent);
        assert!(double > single);
        assert_eq!(double, 0.95);
    }

    #[test]
    fn ionic_character_overrides_pair_table() {
        let (na, cl) = (element(11), element(17));
        assert_eq!(stability_score(&na, &cl, 1, BondCharacter::Ionic), 0.90);
        assert_eq!(stability_score(&na, &cl, 2, BondCharacter::Ionic), 0.20);
    }

    #[test]
    fn unlisted_pairs_decay_from_base_score() {
        let (si, s) = (element(14), element(16));
        let character = BondCharacter::PolarCovalent;
        assert_eq!(stability_score(&si, &s, 1, character), 0.85);
        assert!((stability_score(&si, &s, 2, character) - 0.765).abs() < 1e-12);
        assert!((stability_score(&si, &s, 3, character) - 0.6375).abs() < 1e-12);
        assert_eq!(stability_score(&si, &s, 4, character), 0.5);
    }

    #[test]
    fn superheavy_pairs_have_no_table_entry() {
        assert_eq!(pair_stability(6, 120), None);
    }
}
