//! Empirical exceptions to idealized Madelung filling.
//!
//! Half-filled and filled d shells are stabilized in several transition metals,
//! and in the early lanthanides and actinides a d orbital fills before the f
//! shell. Each entry is the exact ground-state configuration, listed in filling
//! order, and replaces the idealized result for that atomic number.

use super::orbitals::{Occupation, Subshell};
use super::orbitals::Subshell::{D, F, P, S};
use phf::{Map, phf_map};

type Exact = &'static [(u8, Subshell, u8)];

static EXCEPTIONS: Map<u32, Exact> = phf_map! {
    // Cr
    24u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 5), (4, S, 1)],
    // Cu
    29u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 1)],
    // Nb
    41u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 4), (5, S, 1)],
    // Mo
    42u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 5), (5, S, 1)],
    // Ru
    44u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 7), (5, S, 1)],
    // Rh
    45u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 8), (5, S, 1)],
    // Pd
    46u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10)],
    // Ag
    47u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 1)],
    // La
    57u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (5, D, 1), (6, S, 2)],
    // Ce
    58u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 1), (5, D, 1), (6, S, 2)],
    // Gd
    64u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 7), (5, D, 1), (6, S, 2)],
    // Pt
    78u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 9), (6, S, 1)],
    // Au
    79u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 1)],
    // Ac
    89u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (6, D, 1), (7, S, 2)],
    // Th
    90u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (6, D, 2), (7, S, 2)],
    // Pa
    91u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (5, F, 2), (6, D, 1), (7, S, 2)],
    // U
    92u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (5, F, 3), (6, D, 1), (7, S, 2)],
    // Np
    93u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (5, F, 4), (6, D, 1), (7, S, 2)],
    // Cm
    96u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (5, F, 7), (6, D, 1), (7, S, 2)],
    // Lr
    103u32 => &[(1, S, 2), (2, S, 2), (2, P, 6), (3, S, 2), (3, P, 6), (3, D, 10), (4, S, 2), (4, P, 6), (4, D, 10), (5, S, 2), (5, P, 6), (4, F, 14), (5, D, 10), (6, S, 2), (6, P, 6), (5, F, 14), (6, D, 1), (7, S, 2)],
};

/// The exact configuration for `z`, if `z` is a known exception.
pub fn lookup(z: u32) -> Option<Vec<Occupation>> {
    EXCEPTIONS.get(&z).map(|exact| {
        exact
            .iter()
            .map(|&(n, subshell, electrons)| Occupation::new(n, subshell, electrons))
            .collect()
    })
}

pub fn is_exception(z: u32) -> bool {
    EXCEPTIONS.contains_key(&z)
}

/// Atomic numbers covered by the table, ascending.
pub fn atomic_numbers() -> Vec<u32> {
    let mut keys: Vec<u32> = EXCEPTIONS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theory::orbitals::{ElectronConfiguration, NobleGasCore};

    #[test]
    fn every_exception_holds_exactly_z_electrons() {
        for z in atomic_numbers() {
            let config = ElectronConfiguration::from_occupations(lookup(z).unwrap());
            assert_eq!(config.total_electrons(), z, "Z={z}");
        }
    }

    #[test]
    fn table_covers_the_known_transition_metal_and_f_block_anomalies() {
        assert_eq!(
            atomic_numbers(),
            [24, 29, 41, 42, 44, 45, 46, 47, 57, 58, 64, 78, 79, 89, 90, 91, 92, 93, 96, 103]
        );
        assert!(is_exception(24));
        assert!(!is_exception(25));
    }

    #[test]
    fn every_exception_keeps_its_noble_gas_core_intact() {
        for z in atomic_numbers() {
            let config = ElectronConfiguration::from_occupations(lookup(z).unwrap());
            let core = NobleGasCore::below(z).unwrap();
            let compact = config.compact(z);
            assert_eq!(
                compact.valence().total_electrons() + core.atomic_number,
                z,
                "Z={z}"
            );
        }
    }

    #[test]
    fn copper_fills_its_d_shell() {
        let config = ElectronConfiguration::from_occupations(lookup(29).unwrap());
        assert_eq!(config.compact(29).to_string(), "[Ar] 3d10 4s1");
    }

    #[test]
    fn lanthanum_places_its_electron_in_5d() {
        let config = ElectronConfiguration::from_occupations(lookup(57).unwrap());
        assert_eq!(config.compact(57).to_string(), "[Xe] 5d1 6s2");
    }

    #[test]
    fn lookup_of_regular_element_is_none() {
        assert!(lookup(6).is_none());
    }
}
