use super::graph::{MolecularGraph, StructureError};
use serde::Deserialize;
use std::collections::HashMap;

/// Reference energies per localized bond, keyed `"C-C"`, `"C=O"`, `"N#N"`.
///
/// Either atom order is accepted on lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BondEnergyTable {
    energies: HashMap<String, f64>,
}

fn order_symbol(order: u8) -> Option<char> {
    match order {
        1 => Some('-'),
        2 => Some('='),
        3 => Some('#'),
        _ => None,
    }
}

impl BondEnergyTable {
    pub fn new(energies: HashMap<String, f64>) -> Self {
        Self { energies }
    }

    pub fn insert(&mut self, key: impl Into<String>, energy: f64) {
        self.energies.insert(key.into(), energy);
    }

    pub fn get(&self, a: &str, b: &str, order: u8) -> Option<f64> {
        let symbol = order_symbol(order)?;
        self.energies
            .get(&format!("{a}{symbol}{b}"))
            .or_else(|| self.energies.get(&format!("{b}{symbol}{a}")))
            .copied()
    }

    /// Naive additive energy: the sum of reference energies of every bond.
    ///
    /// Delocalized bonds (1 < order < 2) are treated as a localized Kekulé
    /// structure, alternating double and single along the edge list.
    pub fn naive_energy(&self, graph: &MolecularGraph) -> Result<f64, StructureError> {
        let atoms = graph.atoms();
        let mut delocalized_seen = 0usize;
        let mut total = 0.0;

        for (index, bond) in graph.bonds().iter().enumerate() {
            let order = if bond.is_fractional() {
                let localized = if delocalized_seen % 2 == 0 { 2 } else { 1 };
                delocalized_seen += 1;
                localized
            } else {
                integral_order(bond.order).ok_or(StructureError::UnsupportedOrder {
                    edge: index,
                    order: bond.order,
                })?
            };

            let (a, b) = (&atoms[bond.a], &atoms[bond.b]);
            let energy = self
                .get(a, b, order)
                .ok_or_else(|| StructureError::MissingReference {
                    key: format!("{a}{}{b}", order_symbol(order).unwrap_or('?')),
                })?;
            total += energy;
        }

        Ok(total)
    }
}

fn integral_order(order: f64) -> Option<u8> {
    let rounded = order.round();
    if (order - rounded).abs() > f64::EPSILON || !(1.0..=3.0).contains(&rounded) {
        return None;
    }
    Some(rounded as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crystallization::graph::Edge;

    fn table() -> BondEnergyTable {
        let mut table = BondEnergyTable::default();
        table.insert("C-C", -348.0);
        table.insert("C=C", -614.0);
        table.insert("C-H", -413.0);
        table.insert("C=O", -799.0);
        table
    }

    #[test]
    fn lookup_accepts_either_atom_order() {
        let table = table();
        assert_eq!(table.get("H", "C", 1), Some(-413.0));
        assert_eq!(table.get("C", "H", 1), Some(-413.0));
        assert_eq!(table.get("C", "C", 3), None);
        assert_eq!(table.get("C", "C", 0), None);
    }

    #[test]
    fn localized_bonds_are_summed() {
        let co2 = MolecularGraph::new(
            vec!["O".into(), "C".into(), "O".into()],
            vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 2.0)],
        )
        .unwrap();
        assert_eq!(table().naive_energy(&co2).unwrap(), -1598.0);
    }

    #[test]
    fn aromatic_ring_alternates_double_and_single() {
        let ring = MolecularGraph::ring("C", 6, 1.5);
        let naive = table().naive_energy(&ring).unwrap();
        assert_eq!(naive, 3.0 * -614.0 + 3.0 * -348.0);
    }

    #[test]
    fn missing_reference_names_the_bond() {
        let n2 = MolecularGraph::new(
            vec!["N".into(), "N".into()],
            vec![Edge::new(0, 1, 3.0)],
        )
        .unwrap();
        assert_eq!(
            table().naive_energy(&n2),
            Err(StructureError::MissingReference {
                key: "N#N".to_string()
            })
        );
    }

    #[test]
    fn non_integral_order_outside_aromatic_range_is_rejected() {
        let odd = MolecularGraph::new(
            vec!["C".into(), "C".into()],
            vec![Edge::new(0, 1, 2.5)],
        )
        .unwrap();
        assert!(matches!(
            table().naive_energy(&odd),
            Err(StructureError::UnsupportedOrder { edge: 0, .. })
        ));
    }

    #[test]
    fn table_deserializes_from_flat_toml() {
        let table: BondEnergyTable = toml::from_str(
            r#"
            "C-C" = -348.0
            "C=C" = -614
            "#,
        )
        .unwrap();
        assert_eq!(table.get("C", "C", 2), Some(-614.0));
    }
}
