use crate::core::bonding::BondRuleEngine;
use crate::core::models::bond::BondPrediction;
use crate::core::models::element::Element;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Most likely bond for one unordered element pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BondTableEntry {
    /// Atomic number of the lighter partner.
    pub a: u32,
    /// Atomic number of the heavier partner.
    pub b: u32,
    pub prediction: BondPrediction,
}

/// Predicts the most likely bond for every unordered pair, self-pairs included.
///
/// Entries are sorted by `(a, b)` regardless of input order.
#[instrument(skip_all, name = "bond_table_task")]
pub fn run(
    elements: &[Element],
    engine: &BondRuleEngine,
    reporter: &ProgressReporter,
) -> Vec<BondTableEntry> {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|element| element.atomic_number);

    let pairs: Vec<(usize, usize)> = (0..ordered.len())
        .flat_map(|i| (i..ordered.len()).map(move |j| (i, j)))
        .collect();

    info!(
        elements = ordered.len(),
        pairs = pairs.len(),
        "Computing pairwise bond table."
    );
    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.into_iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.into_par_iter();

    let mut entries: Vec<BondTableEntry> = iterator
        .map(|(i, j)| {
            let (a, b) = (ordered[i], ordered[j]);
            let prediction = engine.predict(a, b);
            reporter.report(Progress::TaskIncrement);
            BondTableEntry {
                a: a.atomic_number,
                b: b.atomic_number,
                prediction,
            }
        })
        .collect();

    entries.sort_by_key(|entry| (entry.a, entry.b));
    reporter.report(Progress::TaskFinish);
    entries
}
