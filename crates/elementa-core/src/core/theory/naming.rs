//! IUPAC systematic element names (e.g. 120 → Unbinilium, Ubn).

const DIGIT_ROOTS: [&str; 10] = [
    "nil", "un", "bi", "tri", "quad", "pent", "hex", "sept", "oct", "enn",
];

/// Systematic `(symbol, name)` for atomic number `z`.
///
/// Each decimal digit maps to a root; the name is the concatenated roots plus
/// "ium", the symbol the first letter of each root. Both are capitalized. Roots
/// are joined verbatim, without the IUPAC vowel elision ("tri" + "ium").
pub fn systematic_name(z: u32) -> (String, String) {
    let roots: Vec<&str> = z
        .to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .map(|digit| DIGIT_ROOTS[digit as usize])
        .collect();

    let symbol: String = roots
        .iter()
        .filter_map(|root| root.chars().next())
        .collect();
    let name = format!("{}ium", roots.concat());

    (capitalize(&symbol), capitalize(&name))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
