//! Bundled reference data for the 118 experimentally observed elements.
//!
//! Pauling electronegativities are listed where a commonly accepted value
//! exists. Noble gases are left without a value, as are elements whose value
//! is only an estimate; both fall back to valence-based extrapolation.

/// Number of experimentally observed elements.
pub const OBSERVED_ELEMENTS: u32 = 118;

/// `(symbol, name, pauling_electronegativity)` indexed by `Z - 1`.
static PERIODIC_TABLE: [(&str, &str, Option<f64>); OBSERVED_ELEMENTS as usize] = [
    ("H", "Hydrogen", Some(2.20)),
    ("He", "Helium", None),
    ("Li", "Lithium", Some(0.98)),
    ("Be", "Beryllium", Some(1.57)),
    ("B", "Boron", Some(2.04)),
    ("C", "Carbon", Some(2.55)),
    ("N", "Nitrogen", Some(3.04)),
    ("O", "Oxygen", Some(3.44)),
    ("F", "Fluorine", Some(3.98)),
    ("Ne", "Neon", None),
    ("Na", "Sodium", Some(0.93)),
    ("Mg", "Magnesium", Some(1.31)),
    ("Al", "Aluminium", Some(1.61)),
    ("Si", "Silicon", Some(1.90)),
    ("P", "Phosphorus", Some(2.19)),
    ("S", "Sulfur", Some(2.58)),
    ("Cl", "Chlorine", Some(3.16)),
    ("Ar", "Argon", None),
    ("K", "Potassium", Some(0.82)),
    ("Ca", "Calcium", Some(1.00)),
    ("Sc", "Scandium", Some(1.36)),
    ("Ti", "Titanium", Some(1.54)),
    ("V", "Vanadium", Some(1.63)),
    ("Cr", "Chromium", Some(1.66)),
    ("Mn", "Manganese", Some(1.55)),
    ("Fe", "Iron", Some(1.83)),
    ("Co", "Cobalt", Some(1.88)),
    ("Ni", "Nickel", Some(1.91)),
    ("Cu", "Copper", Some(1.90)),
    ("Zn", "Zinc", Some(1.65)),
    ("Ga", "Gallium", Some(1.81)),
    ("Ge", "Germanium", Some(2.01)),
    ("As", "Arsenic", Some(2.18)),
    ("Se", "Selenium", Some(2.55)),
    ("Br", "Bromine", Some(2.96)),
    ("Kr", "Krypton", None),
    ("Rb", "Rubidium", Some(0.82)),
    ("Sr", "Strontium", Some(0.95)),
    ("Y", "Yttrium", Some(1.22)),
    ("Zr", "Zirconium", Some(1.33)),
    ("Nb", "Niobium", Some(1.60)),
    ("Mo", "Molybdenum", Some(2.16)),
    ("Tc", "Technetium", Some(1.90)),
    ("Ru", "Ruthenium", Some(2.20)),
    ("Rh", "Rhodium", Some(2.28)),
    ("Pd", "Palladium", Some(2.20)),
    ("Ag", "Silver", Some(1.93)),
    ("Cd", "Cadmium", Some(1.69)),
    ("In", "Indium", Some(1.78)),
    ("Sn", "Tin", Some(1.96)),
    ("Sb", "Antimony", Some(2.05)),
    ("Te", "Tellurium", Some(2.10)),
    ("I", "Iodine", Some(2.66)),
    ("Xe", "Xenon", None),
    ("Cs", "Caesium", Some(0.79)),
    ("Ba", "Barium", Some(0.89)),
    ("La", "Lanthanum", Some(1.10)),
    ("Ce", "Cerium", Some(1.12)),
    ("Pr", "Praseodymium", Some(1.13)),
    ("Nd", "Neodymium", Some(1.14)),
    ("Pm", "Promethium", None),
    ("Sm", "Samarium", Some(1.17)),
    ("Eu", "Europium", None),
    ("Gd", "Gadolinium", Some(1.20)),
    ("Tb", "Terbium", None),
    ("Dy", "Dysprosium", Some(1.22)),
    ("Ho", "Holmium", Some(1.23)),
    ("Er", "Erbium", Some(1.24)),
    ("Tm", "Thulium", Some(1.25)),
    ("Yb", "Ytterbium", None),
    ("Lu", "Lutetium", Some(1.27)),
    ("Hf", "Hafnium", Some(1.30)),
    ("Ta", "Tantalum", Some(1.50)),
    ("W", "Tungsten", Some(2.36)),
    ("Re", "Rhenium", Some(1.90)),
    ("Os", "Osmium", Some(2.20)),
    ("Ir", "Iridium", Some(2.20)),
    ("Pt", "Platinum", Some(2.28)),
    ("Au", "Gold", Some(2.54)),
    ("Hg", "Mercury", Some(2.00)),
    ("Tl", "Thallium", Some(1.62)),
    ("Pb", "Lead", Some(2.33)),
    ("Bi", "Bismuth", Some(2.02)),
    ("Po", "Polonium", Some(2.00)),
    ("At", "Astatine", Some(2.20)),
    ("Rn", "Radon", None),
    ("Fr", "Francium", Some(0.70)),
    ("Ra", "Radium", Some(0.90)),
    ("Ac", "Actinium", Some(1.10)),
    ("Th", "Thorium", Some(1.30)),
    ("Pa", "Protactinium", Some(1.50)),
    ("U", "Uranium", Some(1.38)),
    ("Np", "Neptunium", Some(1.36)),
    ("Pu", "Plutonium", Some(1.28)),
    ("Am", "Americium", Some(1.30)),
    ("Cm", "Curium", Some(1.30)),
    ("Bk", "Berkelium", Some(1.30)),
    ("Cf", "Californium", Some(1.30)),
    ("Es", "Einsteinium", Some(1.30)),
    ("Fm", "Fermium", Some(1.30)),
    ("Md", "Mendelevium", Some(1.30)),
    ("No", "Nobelium", Some(1.30)),
    ("Lr", "Lawrencium", None),
    ("Rf", "Rutherfordium", None),
    ("Db", "Dubnium", None),
    ("Sg", "Seaborgium", None),
    ("Bh", "Bohrium", None),
    ("Hs", "Hassium", None),
    ("Mt", "Meitnerium", None),
    ("Ds", "Darmstadtium", None),
    ("Rg", "Roentgenium", None),
    ("Cn", "Copernicium", None),
    ("Nh", "Nihonium", None),
    ("Fl", "Flerovium", None),
    ("Mc", "Moscovium", None),
    ("Lv", "Livermorium", None),
    ("Ts", "Tennessine", None),
    ("Og", "Oganesson", None),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntry {
    pub symbol: &'static str,
    pub name: &'static str,
    pub electronegativity: Option<f64>,
}

pub fn entry(z: u32) -> Option<ReferenceEntry> {
    let index = usize::try_from(z.checked_sub(1)?).ok()?;
    PERIODIC_TABLE
        .get(index)
        .map(|&(symbol, name, electronegativity)| ReferenceEntry {
            symbol,
            name,
            electronegativity,
        })
}

pub fn symbol(z: u32) -> Option<&'static str> {
    entry(z).map(|e| e.symbol)
}

pub(crate) fn entries() -> impl Iterator<Item = (u32, ReferenceEntry)> {
    (1..=OBSERVED_ELEMENTS).filter_map(|z| entry(z).map(|e| (z, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_indexed_by_atomic_number() {
        assert_eq!(symbol(1), Some("H"));
        assert_eq!(symbol(6), Some("C"));
        assert_eq!(symbol(79), Some("Au"));
        assert_eq!(symbol(118), Some("Og"));
    }

    #[test]
    fn entry_outside_observed_range_is_none() {
        assert!(entry(0).is_none());
        assert!(entry(119).is_none());
    }

    #[test]
    fn noble_gases_carry_no_electronegativity() {
        for z in [2, 10, 18, 36, 54, 86, 118] {
            assert_eq!(entry(z).unwrap().electronegativity, None, "Z={z}");
        }
    }

    #[test]
    fn pauling_values_used_by_bond_classification() {
        assert_eq!(entry(6).unwrap().electronegativity, Some(2.55));
        assert_eq!(entry(8).unwrap().electronegativity, Some(3.44));
        assert_eq!(entry(11).unwrap().electronegativity, Some(0.93));
        assert_eq!(entry(17).unwrap().electronegativity, Some(3.16));
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<&str> = entries().map(|(_, e)| e.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), OBSERVED_ELEMENTS as usize);
    }
}
