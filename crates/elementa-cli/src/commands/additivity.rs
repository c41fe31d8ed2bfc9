use crate::cli::AdditivityArgs;
use crate::error::{CliError, Result};
use crate::utils::structure::StructureFile;
use elementa::core::crystallization::detector::AdditivityViolation;
use elementa::engine::config::DetectorConfigBuilder;
use elementa::engine::error::EngineError;
use elementa::workflows::predict;
use tracing::info;

pub fn run(args: &AdditivityArgs) -> Result<AdditivityViolation> {
    let mut builder = DetectorConfigBuilder::new();
    if let Some(threshold) = args.threshold {
        builder = builder.violation_threshold(threshold);
    }
    let config = builder
        .build()
        .map_err(|e| CliError::Elementa(e.into()))?;

    info!("Loading structure from {:?}", &args.structure);
    let structure = StructureFile::read_from_path(&args.structure)?;
    let naive = structure
        .energies
        .naive_energy(&structure.graph)
        .map_err(EngineError::from)?;

    let result = predict::measure_additivity_violation(
        &structure.graph,
        |_| naive,
        structure.actual,
        structure.confidence,
        &config,
    );

    println!("{}", result);
    println!("  Naive:    {:.2}", result.naive_value);
    println!("  Actual:   {:.2}", result.actual_value);
    println!("  Features: {}", result.features);
    println!("  {}", result.reasoning);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementa::core::crystallization::detector::Classification;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const BENZENE: &str = r#"
        actual = -5800.0
        confidence = 0.95

        [graph]
        atoms = ["C", "C", "C", "C", "C", "C", "H", "H", "H", "H", "H", "H"]
        bonds = [
            { a = 0, b = 1, order = 1.5 },
            { a = 1, b = 2, order = 1.5 },
            { a = 2, b = 3, order = 1.5 },
            { a = 3, b = 4, order = 1.5 },
            { a = 4, b = 5, order = 1.5 },
            { a = 5, b = 0, order = 1.5 },
            { a = 0, b = 6, order = 1.0 },
            { a = 1, b = 7, order = 1.0 },
            { a = 2, b = 8, order = 1.0 },
            { a = 3, b = 9, order = 1.0 },
            { a = 4, b = 10, order = 1.0 },
            { a = 5, b = 11, order = 1.0 },
        ]

        [energies]
        "C=C" = -614.0
        "C-C" = -348.0
        "C-H" = -413.0
    "#;

    fn write(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("structure.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn benzene_must_be_cached() {
        let dir = tempdir().unwrap();
        let args = AdditivityArgs {
            structure: write(dir.path(), BENZENE),
            threshold: None,
        };
        let result = run(&args).unwrap();
        assert_eq!(result.naive_value, -5364.0);
        assert_eq!(result.classification, Classification::MustCache);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn higher_threshold_relaxes_classification() {
        let dir = tempdir().unwrap();
        let args = AdditivityArgs {
            structure: write(dir.path(), BENZENE),
            threshold: Some(0.2),
        };
        let result = run(&args).unwrap();
        assert_eq!(result.classification, Classification::Uncertain);
    }

    #[test]
    fn missing_reference_energy_is_reported() {
        let dir = tempdir().unwrap();
        let content = BENZENE.replace("\"C-H\" = -413.0", "");
        let args = AdditivityArgs {
            structure: write(dir.path(), &content),
            threshold: None,
        };
        let result = run(&args);
        assert!(matches!(
            result,
            Err(CliError::Elementa(EngineError::Structure { .. }))
        ));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let args = AdditivityArgs {
            structure: "unused.toml".into(),
            threshold: Some(0.0),
        };
        let result = run(&args);
        assert!(matches!(
            result,
            Err(CliError::Elementa(EngineError::Config { .. }))
        ));
    }
}
