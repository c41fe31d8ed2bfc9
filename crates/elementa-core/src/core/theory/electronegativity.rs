//! Valence-based extrapolation of Pauling electronegativity.
//!
//! Used for elements without a reference value. The mapping is deliberately
//! coarse: it only has to separate metals, metalloids and halogens well enough
//! for bond-character classification.

/// Approximate Pauling electronegativity from the valence electron count.
///
/// Returns `None` for a closed shell (valence 8, or 2 for `z <= 2`), where
/// electronegativity is undefined.
pub fn extrapolate(z: u32, valence_electrons: u32) -> Option<f64> {
    if is_closed_shell(z, valence_electrons) {
        return None;
    }

    Some(match valence_electrons {
        1 => 0.8,
        2 => 1.2,
        v @ 3..=6 => 1.5 + (v - 3) as f64 * (2.5 - 1.5) / 3.0,
        7 => 3.0,
        _ => 2.0,
    })
}

pub(crate) fn is_closed_shell(z: u32, valence_electrons: u32) -> bool {
    valence_electrons == 8 || (valence_electrons == 2 && z <= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn closed_shells_have_no_electronegativity() {
        assert_eq!(extrapolate(2, 2), None);
        assert_eq!(extrapolate(118, 8), None);
        assert_eq!(extrapolate(10, 8), None);
    }

    #[test]
    fn alkaline_earth_valence_two_is_not_a_closed_shell() {
        assert_eq!(extrapolate(120, 2), Some(1.2));
    }

    #[test]
    fn fixed_points_of_the_scale() {
        assert_eq!(extrapolate(119, 1), Some(0.8));
        assert_eq!(extrapolate(125, 7), Some(3.0));
        assert_eq!(extrapolate(150, 0), Some(2.0));
    }

    #[test]
    fn valence_three_to_six_interpolates_linearly() {
        let values: Vec<f64> = (3..=6).filter_map(|v| extrapolate(130, v)).collect();
        let expected = [1.5, 1.5 + 1.0 / 3.0, 1.5 + 2.0 / 3.0, 2.5];
        for (value, want) in values.iter().zip(expected) {
            assert!(approx(*value, want), "{value} != {want}");
        }
    }
}
