use super::graph::Edge;

/// Estimates the order of a structure's symmetry group (1 = asymmetric).
pub trait SymmetryEstimator {
    fn estimate(&self, node_count: usize, edges: &[Edge]) -> u32;
}

/// Degree-regularity heuristic.
///
/// A graph whose nodes all share the same nonzero degree is treated as
/// symmetric: 6 for a six-membered ring, 3 for a three-membered ring, the
/// node count for any other regular graph. This is not an automorphism count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularRingSymmetry;

impl SymmetryEstimator for RegularRingSymmetry {
    fn estimate(&self, node_count: usize, edges: &[Edge]) -> u32 {
        if node_count == 0 || edges.is_empty() {
            return 1;
        }

        let mut degrees = vec![0usize; node_count];
        for edge in edges {
            for node in [edge.a, edge.b] {
                if let Some(degree) = degrees.get_mut(node) {
                    *degree += 1;
                }
            }
        }

        let first = degrees[0];
        if degrees.iter().any(|&degree| degree != first) {
            return 1;
        }

        match (node_count, first) {
            (6, 2) => 6,
            (3, 2) => 3,
            _ => u32::try_from(node_count).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(size: usize) -> Vec<Edge> {
        (0..size)
            .map(|i| Edge::new(i, (i + 1) % size, 1.0))
            .collect()
    }

    #[test]
    fn six_ring_has_order_six() {
        assert_eq!(RegularRingSymmetry.estimate(6, &ring(6)), 6);
    }

    #[test]
    fn triangle_has_order_three() {
        assert_eq!(RegularRingSymmetry.estimate(3, &ring(3)), 3);
    }

    #[test]
    fn other_regular_graphs_use_node_count() {
        assert_eq!(RegularRingSymmetry.estimate(5, &ring(5)), 5);
        assert_eq!(RegularRingSymmetry.estimate(2, &[Edge::new(0, 1, 3.0)]), 2);
    }

    #[test]
    fn irregular_graphs_are_asymmetric() {
        let chain = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
        assert_eq!(RegularRingSymmetry.estimate(3, &chain), 1);
    }

    #[test]
    fn empty_graphs_are_asymmetric() {
        assert_eq!(RegularRingSymmetry.estimate(0, &[]), 1);
        assert_eq!(RegularRingSymmetry.estimate(4, &[]), 1);
    }
}
