use super::features::{self, StructuralFeatures};
use super::graph::Substrate;
use super::symmetry::{RegularRingSymmetry, SymmetryEstimator};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_VIOLATION_THRESHOLD: f64 = 0.05;

const LARGE_MAGNITUDE: f64 = 0.10;
const MODERATE_MAGNITUDE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Additive composition is accurate enough; decompose freely.
    DecomposesCleanly,
    /// Cache the structure as an indivisible unit.
    MustCache,
    Uncertain,
}

impl Classification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DecomposesCleanly => "decomposes_cleanly",
            Self::MustCache => "must_cache",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing a naive composed value against ground truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditivityViolation {
    pub naive_value: f64,
    pub actual_value: f64,
    /// `actual - naive`.
    pub violation: f64,
    /// `violation / |actual|`, or 0 when `actual` is exactly 0.
    pub relative_violation: f64,
    /// Confidence in the ground-truth value.
    pub confidence: f64,
    pub classification: Classification,
    pub features: StructuralFeatures,
    pub reasoning: String,
}

impl AdditivityViolation {
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.relative_violation.abs() > threshold
    }
}

impl fmt::Display for AdditivityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdditivityViolation(violation={:.1}, relative={}, classification='{}')",
            self.violation,
            percent(self.relative_violation),
            self.classification
        )
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Flags structures whose behavior is not the sum of their parts.
#[derive(Debug, Clone)]
pub struct CrystallizationDetector<E = RegularRingSymmetry> {
    threshold: f64,
    symmetry: E,
}

impl Default for CrystallizationDetector {
    fn default() -> Self {
        Self::new(DEFAULT_VIOLATION_THRESHOLD)
    }
}

impl CrystallizationDetector {
    /// Detector with the given relative-violation threshold.
    ///
    /// Violations above twice the threshold always require caching.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            symmetry: RegularRingSymmetry,
        }
    }
}

impl<E: SymmetryEstimator> CrystallizationDetector<E> {
    /// Replaces the symmetry-order estimator.
    pub fn with_symmetry_estimator<T: SymmetryEstimator>(
        self,
        symmetry: T,
    ) -> CrystallizationDetector<T> {
        CrystallizationDetector {
            threshold: self.threshold,
            symmetry,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Measures the additivity violation of `structure`.
    ///
    /// `naive_fn` computes the additive estimate; `actual` is the ground truth
    /// and `confidence` the trust placed in it.
    pub fn measure<S, F>(
        &self,
        structure: &S,
        naive_fn: F,
        actual: f64,
        confidence: f64,
    ) -> AdditivityViolation
    where
        S: Substrate + ?Sized,
        F: FnOnce(&S) -> f64,
    {
        let naive_value = naive_fn(structure);
        let violation = actual - naive_value;
        let relative_violation = if actual == 0.0 {
            0.0
        } else {
            violation / actual.abs()
        };

        let features = self.extract_features(structure);
        let classification = self.classify(relative_violation, &features);
        let reasoning = reasoning(violation, relative_violation, classification, &features);

        AdditivityViolation {
            naive_value,
            actual_value: actual,
            violation,
            relative_violation,
            confidence: confidence.clamp(0.0, 1.0),
            classification,
            features,
            reasoning,
        }
    }

    pub fn extract_features<S: Substrate + ?Sized>(&self, structure: &S) -> StructuralFeatures {
        features::extract(structure, &self.symmetry)
    }

    pub fn classify(
        &self,
        relative_violation: f64,
        features: &StructuralFeatures,
    ) -> Classification {
        let magnitude = relative_violation.abs();
        let special = features.has_resonance() || features.is_symmetric();

        if magnitude > 2.0 * self.threshold {
            Classification::MustCache
        } else if magnitude < self.threshold && !special {
            Classification::DecomposesCleanly
        } else if magnitude > self.threshold && special {
            Classification::MustCache
        } else {
            Classification::Uncertain
        }
    }
}

/// "Large stabilization (12.3%), resonance/delocalization detected, ... → must_cache"
fn reasoning(
    violation: f64,
    relative_violation: f64,
    classification: Classification,
    features: &StructuralFeatures,
) -> String {
    let magnitude = relative_violation.abs();
    let size = if magnitude > LARGE_MAGNITUDE {
        "Large"
    } else if magnitude > MODERATE_MAGNITUDE {
        "Moderate"
    } else {
        "Small"
    };
    let direction = if violation < 0.0 {
        "stabilization"
    } else {
        "destabilization"
    };

    let mut parts = vec![format!("{size} {direction} ({})", percent(magnitude))];
    if features.has_resonance() {
        parts.push("resonance/delocalization detected".to_string());
    }
    if features.is_symmetric() {
        parts.push(format!("symmetry order {}", features.symmetry_order));
    }
    if features.cycle_count > 0 {
        parts.push(format!("{} cycle(s)", features.cycle_count));
    }
    parts.push(format!("→ {classification}"));
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crystallization::graph::{Edge, MolecularGraph, Opaque};

    fn propane_chain() -> MolecularGraph {
        MolecularGraph::new(
            vec!["C".into(), "C".into(), "C".into()],
            vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)],
        )
        .unwrap()
    }

    struct Asymmetric;

    impl SymmetryEstimator for Asymmetric {
        fn estimate(&self, _node_count: usize, _edges: &[Edge]) -> u32 {
            1
        }
    }

    #[test]
    fn violation_is_actual_minus_naive() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&Opaque, |_| -100.0, -110.0, 1.0);
        assert_eq!(result.violation, -10.0);
        assert!((result.relative_violation + 10.0 / 110.0).abs() < 1e-12);
        assert_eq!(result.naive_value, -100.0);
        assert_eq!(result.actual_value, -110.0);
    }

    #[test]
    fn zero_actual_gives_zero_relative_violation() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&Opaque, |_| 5.0, 0.0, 1.0);
        assert_eq!(result.violation, -5.0);
        assert_eq!(result.relative_violation, 0.0);
    }

    #[test]
    fn large_violation_always_caches() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&propane_chain(), |_| 100.0, 120.0, 1.0);
        assert_eq!(result.classification, Classification::MustCache);
        assert_eq!(
            result.reasoning,
            "Large destabilization (16.7%) → must_cache"
        );
    }

    #[test]
    fn small_violation_on_plain_structure_decomposes() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&propane_chain(), |_| 100.0, 102.0, 1.0);
        assert_eq!(result.classification, Classification::DecomposesCleanly);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn small_violation_on_symmetric_ring_is_uncertain() {
        let detector = CrystallizationDetector::default();
        let ring = MolecularGraph::ring("C", 3, 1.0);
        let result = detector.measure(&ring, |_| -100.0, -102.0, 1.0);
        assert_eq!(result.classification, Classification::Uncertain);
        assert_eq!(
            result.reasoning,
            "Small stabilization (2.0%), symmetry order 3, 1 cycle(s) → uncertain"
        );
    }

    #[test]
    fn moderate_violation_with_resonance_caches() {
        let detector = CrystallizationDetector::default();
        let ring = MolecularGraph::ring("C", 6, 1.5);
        let result = detector.measure(&ring, |_| -93.0, -100.0, 1.0);
        assert_eq!(result.classification, Classification::MustCache);
        assert!(result.reasoning.starts_with("Moderate stabilization (7.0%)"));
        assert!(result.reasoning.contains("resonance/delocalization detected"));
        assert!(result.reasoning.contains("symmetry order 6"));
    }

    #[test]
    fn moderate_violation_without_special_structure_is_uncertain() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&propane_chain(), |_| 100.0, 107.0, 1.0);
        assert_eq!(result.classification, Classification::Uncertain);
    }

    #[test]
    fn threshold_scales_the_classification() {
        let strict = CrystallizationDetector::new(0.01);
        let result = strict.measure(&propane_chain(), |_| 100.0, 103.0, 1.0);
        assert_eq!(result.classification, Classification::MustCache);
        assert_eq!(strict.threshold(), 0.01);
    }

    #[test]
    fn symmetry_estimator_is_swappable() {
        let detector = CrystallizationDetector::new(0.05).with_symmetry_estimator(Asymmetric);
        let ring = MolecularGraph::ring("C", 3, 1.0);
        let features = detector.extract_features(&ring);
        assert_eq!(features.symmetry_order, 1);
        let result = detector.measure(&ring, |_| -100.0, -102.0, 1.0);
        assert_eq!(result.classification, Classification::DecomposesCleanly);
    }

    #[test]
    fn naive_function_receives_the_structure() {
        let detector = CrystallizationDetector::default();
        let ring = MolecularGraph::ring("C", 6, 1.0);
        let result = detector.measure(&ring, |graph| graph.bonds().len() as f64, 6.0, 0.5);
        assert_eq!(result.violation, 0.0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn display_reports_relative_violation_as_percent() {
        let detector = CrystallizationDetector::default();
        let result = detector.measure(&Opaque, |_| 100.0, 120.0, 1.0);
        assert_eq!(
            result.to_string(),
            "AdditivityViolation(violation=20.0, relative=16.7%, classification='must_cache')"
        );
    }

    #[test]
    fn classification_names_are_snake_case() {
        assert_eq!(Classification::DecomposesCleanly.to_string(), "decomposes_cleanly");
        assert_eq!(Classification::MustCache.as_str(), "must_cache");
    }
}
