use crate::cli::{BondArgs, DataOptions};
use crate::error::Result;
use elementa::core::models::bond::{BondPrediction, DEFAULT_RELIABILITY_THRESHOLD};
use elementa::workflows::predict;
use tracing::{info, warn};

pub fn run(args: &BondArgs, options: &DataOptions) -> Result<()> {
    let generator = super::build_generator(options)?;
    let a = predict::generate_element(&generator, args.a)?;
    let b = predict::generate_element(&generator, args.b)?;
    info!(a = %a, b = %b, all_orders = args.all_orders, "Predicting bond.");

    let predictions = if args.all_orders {
        predict::predict_all_bond_orders(&a, &b)
    } else {
        vec![predict::predict_bond(&a, &b)]
    };

    if predictions.is_empty() {
        warn!(a = %a, b = %b, "No admissible bond order.");
        println!("{} and {} have no admissible bond order.", a.symbol, b.symbol);
    }
    for prediction in &predictions {
        print!("{}", render(prediction));
    }
    Ok(())
}

fn render(prediction: &BondPrediction) -> String {
    let mut lines = vec![prediction.to_string(), format!("  {}", prediction.reasoning)];
    lines.extend(
        prediction
            .confidence_breakdown
            .iter()
            .map(|(source, score)| format!("  confidence[{source}] = {score:.2}")),
    );
    if !prediction.is_reliable(DEFAULT_RELIABILITY_THRESHOLD) {
        lines.push(format!(
            "  Low confidence: below {DEFAULT_RELIABILITY_THRESHOLD:.2}"
        ));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
