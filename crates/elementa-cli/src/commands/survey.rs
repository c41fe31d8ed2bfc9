use crate::cli::{DataOptions, SurveyArgs};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use elementa::core::models::element::Element;
use elementa::engine::progress::ProgressReporter;
use elementa::engine::tasks::bond_table::BondTableEntry;
use elementa::workflows::survey::{self, SurveyResult};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// One CSV row of the bond table.
#[derive(Debug, Serialize)]
struct BondRow<'a> {
    z_a: u32,
    symbol_a: &'a str,
    z_b: u32,
    symbol_b: &'a str,
    can_bond: Option<bool>,
    character: &'static str,
    order: u8,
    stability: f64,
    confidence: f64,
    reasoning: &'a str,
}

pub fn run(args: &SurveyArgs, options: &DataOptions, quiet: bool) -> Result<()> {
    if args.from > args.to {
        return Err(CliError::Argument(format!(
            "--from ({}) must not exceed --to ({})",
            args.from, args.to
        )));
    }

    let config = super::generator_config(options)?;
    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(from = args.from, to = args.to, "Invoking the survey workflow...");
    let result = survey::run(&config, args.from..=args.to, &reporter)?;

    print_summary(&result);
    if let Some(path) = &args.output {
        write_csv(path, &result.elements, &result.bonds)?;
        println!("Bond table written to: {}", path.display());
    }
    Ok(())
}

fn print_summary(result: &SurveyResult) {
    let summary = &result.summary;
    println!(
        "Surveyed {} elements, {} pairs.",
        result.elements.len(),
        summary.pairs
    );
    println!("  Bonding:  {}", summary.bonding);
    println!("  Ionic:    {}", summary.ionic);
    println!("  Covalent: {}", summary.covalent);
    println!("  Inert:    {}", summary.inert);
    println!("  Unknown:  {}", summary.unknown);
    println!("  Reliable: {}", summary.reliable);
}

fn write_csv(path: &Path, elements: &[Element], bonds: &[BondTableEntry]) -> Result<()> {
    let symbols: HashMap<u32, &str> = elements
        .iter()
        .map(|element| (element.atomic_number, element.symbol.as_str()))
        .collect();
    let symbol = |z: u32| symbols.get(&z).copied().unwrap_or("?");

    let mut writer = csv::Writer::from_path(path)?;
    for entry in bonds {
        let prediction = &entry.prediction;
        writer.serialize(BondRow {
            z_a: entry.a,
            symbol_a: symbol(entry.a),
            z_b: entry.b,
            symbol_b: symbol(entry.b),
            can_bond: prediction.can_bond,
            character: prediction.character.as_str(),
            order: prediction.order,
            stability: prediction.stability,
            confidence: prediction.confidence,
            reasoning: &prediction.reasoning,
        })?;
    }
    writer.flush()?;
    info!(rows = bonds.len(), path = %path.display(), "Bond table written.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::default_options;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_one_row_per_pair() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bonds.csv");
        let args = SurveyArgs {
            from: 1,
            to: 4,
            output: Some(path.clone()),
        };
        run(&args, &default_options(), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("z_a,symbol_a,z_b,symbol_b,can_bond,character,order,stability,confidence,reasoning")
        );
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 10);
        assert!(rows[0].starts_with("1,H,1,H,true,nonpolar_covalent,1,"));
        assert!(rows.iter().any(|row| row.starts_with("1,H,2,He,false,none,0,")));
    }

    #[test]
    fn inverted_range_is_an_argument_error() {
        let args = SurveyArgs {
            from: 10,
            to: 5,
            output: None,
        };
        let result = run(&args, &default_options(), true);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn out_of_range_survey_propagates_core_error() {
        let args = SurveyArgs {
            from: 195,
            to: 205,
            output: None,
        };
        let result = run(&args, &default_options(), true);
        assert!(matches!(result, Err(CliError::Elementa(_))));
    }
}
