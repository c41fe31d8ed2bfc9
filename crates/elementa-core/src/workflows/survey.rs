use crate::core::bonding::BondRuleEngine;
use crate::core::models::bond::{BondCharacter, DEFAULT_RELIABILITY_THRESHOLD};
use crate::core::models::element::Element;
use crate::engine::config::GeneratorConfig;
use crate::engine::error::EngineError;
use crate::engine::generator::ElementGenerator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::bond_table::{self, BondTableEntry};
use std::ops::RangeInclusive;
use tracing::{info, instrument};

/// Outcome counts over a bond table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveySummary {
    pub pairs: usize,
    pub bonding: usize,
    pub ionic: usize,
    pub covalent: usize,
    pub inert: usize,
    pub unknown: usize,
    pub reliable: usize,
}

impl SurveySummary {
    pub fn from_entries(entries: &[BondTableEntry], reliability_threshold: f64) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                let prediction = &entry.prediction;
                summary.pairs += 1;
                if prediction.can_bond == Some(true) {
                    summary.bonding += 1;
                }
                match prediction.character {
                    BondCharacter::Ionic => summary.ionic += 1,
                    BondCharacter::NonpolarCovalent | BondCharacter::PolarCovalent => {
                        summary.covalent += 1
                    }
                    BondCharacter::None => summary.inert += 1,
                    BondCharacter::Unknown => summary.unknown += 1,
                }
                if prediction.is_reliable(reliability_threshold) {
                    summary.reliable += 1;
                }
                summary
            })
    }
}

#[derive(Debug, Clone)]
pub struct SurveyResult {
    pub elements: Vec<Element>,
    pub bonds: Vec<BondTableEntry>,
    pub summary: SurveySummary,
}

/// Generates every element in `z_range` and predicts all pairwise bonds.
#[instrument(skip_all, name = "survey_workflow")]
pub fn run(
    config: &GeneratorConfig,
    z_range: RangeInclusive<u32>,
    reporter: &ProgressReporter,
) -> Result<SurveyResult, EngineError> {
    let elements = reporter.phase("Element Generation", || {
        info!(
            from = z_range.start(),
            to = z_range.end(),
            "Generating elements."
        );
        let generator = ElementGenerator::new(config)?;
        Ok::<_, EngineError>(generator.generate_range(z_range)?)
    })?;

    let bonds = reporter.phase("Bond Table", || {
        bond_table::run(&elements, &BondRuleEngine::new(), reporter)
    });

    let summary = SurveySummary::from_entries(&bonds, DEFAULT_RELIABILITY_THRESHOLD);
    reporter.report(Progress::Message(format!(
        "{} pairs, {} bonding, {} reliable",
        summary.pairs, summary.bonding, summary.reliable
    )));
    info!(
        pairs = summary.pairs,
        bonding = summary.bonding,
        ionic = summary.ionic,
        covalent = summary.covalent,
        unknown = summary.unknown,
        "Survey complete."
    );

    Ok(SurveyResult {
        elements,
        bonds,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theory::TheoryError;
    use crate::engine::config::GeneratorConfigBuilder;

    fn config() -> GeneratorConfig {
        GeneratorConfigBuilder::new()
            .profile("default")
            .build()
            .unwrap()
    }

    #[test]
    fn second_period_survey_counts_outcomes() {
        let result = run(&config(), 3..=10, &ProgressReporter::new()).unwrap();
        assert_eq!(result.elements.len(), 8);
        assert_eq!(result.summary.pairs, 36);
        // Neon pairs with every element, itself included.
        assert_eq!(result.summary.inert, 8);
        assert_eq!(
            result.summary.ionic + result.summary.covalent + result.summary.inert
                + result.summary.unknown,
            result.summary.pairs
        );
        assert!(result.summary.bonding > 0);
    }

    #[test]
    fn superheavy_survey_is_less_reliable_than_observed() {
        let observed = run(&config(), 1..=4, &ProgressReporter::new()).unwrap();
        let superheavy = run(&config(), 150..=153, &ProgressReporter::new()).unwrap();
        assert_eq!(observed.summary.reliable, observed.summary.pairs);
        assert!(superheavy.summary.reliable < superheavy.summary.pairs);
    }

    #[test]
    fn invalid_range_is_a_theory_error() {
        let result = run(&config(), 199..=201, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(EngineError::Theory(TheoryError::AtomicNumberOutOfRange { z: 201, .. }))
        ));
    }

    #[test]
    fn summary_from_empty_table_is_zero() {
        assert_eq!(
            SurveySummary::from_entries(&[], DEFAULT_RELIABILITY_THRESHOLD),
            SurveySummary::default()
        );
    }
}
