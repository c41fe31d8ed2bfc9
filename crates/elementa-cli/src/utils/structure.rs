use crate::error::{CliError, Result};
use elementa::core::crystallization::energy::BondEnergyTable;
use elementa::core::crystallization::graph::MolecularGraph;
use serde::Deserialize;
use std::path::Path;

fn full_confidence() -> f64 {
    1.0
}

/// A structure to measure, read from TOML:
///
/// ```toml
/// actual = -5800.0
/// confidence = 0.95
///
/// [graph]
/// atoms = ["C", "C"]
/// bonds = [{ a = 0, b = 1, order = 1.0 }]
///
/// [energies]
/// "C-C" = -348.0
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureFile {
    pub actual: f64,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
    pub graph: MolecularGraph,
    #[serde(default)]
    pub energies: BondEnergyTable,
}

impl StructureFile {
    pub fn read_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ETHYLENE: &str = r#"
        actual = -1500.0

        [graph]
        atoms = ["C", "C", "H", "H", "H", "H"]
        bonds = [
            { a = 0, b = 1, order = 2.0 },
            { a = 0, b = 2, order = 1.0 },
            { a = 0, b = 3, order = 1.0 },
            { a = 1, b = 4, order = 1.0 },
            { a = 1, b = 5, order = 1.0 },
        ]

        [energies]
        "C=C" = -614.0
        "H-C" = -413.0
    "#;

    #[test]
    fn reads_structure_with_default_confidence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ethylene.toml");
        fs::write(&path, ETHYLENE).unwrap();

        let structure = StructureFile::read_from_path(&path).unwrap();
        assert_eq!(structure.actual, -1500.0);
        assert_eq!(structure.confidence, 1.0);
        assert_eq!(structure.graph.atoms().len(), 6);
        assert_eq!(structure.energies.naive_energy(&structure.graph).unwrap(), -2266.0);
    }

    #[test]
    fn out_of_bounds_bond_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(
            &path,
            r#"
            actual = 1.0
            [graph]
            atoms = ["C"]
            bonds = [{ a = 0, b = 3, order = 1.0 }]
            "#,
        )
        .unwrap();

        let result = StructureFile::read_from_path(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = StructureFile::read_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
