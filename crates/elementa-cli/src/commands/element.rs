use crate::cli::{DataOptions, ElementArgs};
use crate::error::Result;
use elementa::core::models::element::Element;
use elementa::workflows::predict;

pub fn run(args: &ElementArgs, options: &DataOptions) -> Result<()> {
    let generator = super::build_generator(options)?;
    let element = predict::generate_element(&generator, args.z)?;
    print!("{}", render(&element));
    Ok(())
}

fn render(element: &Element) -> String {
    let electronegativity = element
        .electronegativity
        .map_or_else(|| "n/a".to_string(), |value| format!("{value:.2}"));

    let mut lines = vec![
        element.to_string(),
        format!("  Configuration:     {}", element.electron_configuration),
        format!("  Valence electrons: {}", element.valence_electrons),
        format!("  Block / period:    {} / {}", element.block, element.period),
        format!("  Status:            {}", element.status),
        format!("  Electronegativity: {}", electronegativity),
        "  Confidence:".to_string(),
    ];
    lines.extend(
        element
            .confidence
            .iter()
            .map(|(property, score)| format!("    {:<24} {:.2}", property.to_string(), score)),
    );

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_generator, default_options};

    #[test]
    fn renders_noble_gas_without_electronegativity() {
        let generator = build_generator(&default_options()).unwrap();
        let neon = generator.generate(10).unwrap();
        let text = render(&neon);
        assert!(text.starts_with("Neon (Ne, Z=10)\n"));
        assert!(text.contains("Electronegativity: n/a"));
        assert!(text.contains("[He] 2s2 2p6"));
    }

    #[test]
    fn renders_every_confidence() {
        let generator = build_generator(&default_options()).unwrap();
        let element = generator.generate(120).unwrap();
        let text = render(&element);
        assert!(text.contains("Unbinilium (Ubn, Z=120)"));
        assert!(text.contains("electron_configuration"));
        assert!(text.contains("0.85"));
        assert_eq!(text.lines().count(), 7 + element.confidence.len());
    }

    #[test]
    fn run_rejects_out_of_range() {
        assert!(run(&ElementArgs { z: 201 }, &default_options()).is_err());
    }
}
