use super::graph::{Edge, GraphLike, Substrate};
use super::symmetry::SymmetryEstimator;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::warn;

const RESONANCE_CONJUGATION: f64 = 0.5;
const RESONANCE_RING_SIZE: usize = 5;
const TYPICAL_MAX_RING: usize = 6;

/// Topology snapshot of a structure. Always derived, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralFeatures {
    pub node_count: usize,
    pub edge_count: usize,
    /// Independent cycles, estimated as edges beyond a spanning tree.
    pub cycle_count: usize,
    /// Largest ring size, capped at 6.
    pub max_cycle_size: usize,
    /// Symmetry-group order estimate; 1 means asymmetric.
    pub symmetry_order: u32,
    pub planar: bool,
    /// Delocalization score in `[0, 1]`.
    pub conjugation: f64,
    pub density: f64,
    pub clustering: f64,
    /// Domain-specific extensions supplied by the substrate.
    pub custom: BTreeMap<String, f64>,
}

impl Default for StructuralFeatures {
    fn default() -> Self {
        Self {
            node_count: 0,
            edge_count: 0,
            cycle_count: 0,
            max_cycle_size: 0,
            symmetry_order: 1,
            planar: true,
            conjugation: 0.0,
            density: 0.0,
            clustering: 0.0,
            custom: BTreeMap::new(),
        }
    }
}

impl StructuralFeatures {
    /// Strong delocalization, or a ring of five or more members.
    pub fn has_resonance(&self) -> bool {
        self.conjugation > RESONANCE_CONJUGATION
            || (self.cycle_count > 0 && self.max_cycle_size >= RESONANCE_RING_SIZE)
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetry_order > 1
    }
}

impl fmt::Display for StructuralFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StructuralFeatures(nodes={}, edges={}, cycles={}, symmetry={})",
            self.node_count, self.edge_count, self.cycle_count, self.symmetry_order
        )
    }
}

/// Extracts features from `substrate` using `symmetry` for the symmetry order.
///
/// Substrates without a graph get the trivial features plus their custom map.
pub fn extract<S, E>(substrate: &S, symmetry: &E) -> StructuralFeatures
where
    S: Substrate + ?Sized,
    E: SymmetryEstimator + ?Sized,
{
    let mut features = match substrate.as_graph() {
        Some(graph) => graph_features(graph, symmetry),
        None => StructuralFeatures::default(),
    };
    features.custom = substrate.custom_features();
    features
}

fn graph_features<E>(graph: &dyn GraphLike, symmetry: &E) -> StructuralFeatures
where
    E: SymmetryEstimator + ?Sized,
{
    let node_count = graph.node_count();
    let edges = valid_edges(node_count, &graph.edges());
    let edge_count = edges.len();

    let (cycle_count, max_cycle_size) = detect_cycles(node_count, edge_count);
    let planar = cycle_count == 0 || max_cycle_size <= TYPICAL_MAX_RING;

    let max_edges = if node_count > 1 {
        (node_count * (node_count - 1)) as f64 / 2.0
    } else {
        1.0
    };

    StructuralFeatures {
        node_count,
        edge_count,
        cycle_count,
        max_cycle_size,
        symmetry_order: symmetry.estimate(node_count, &edges),
        planar,
        conjugation: conjugation(&edges, cycle_count),
        density: edge_count as f64 / max_edges,
        clustering: clustering(node_count, &edges),
        custom: BTreeMap::new(),
    }
}

fn valid_edges(node_count: usize, edges: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .enumerate()
        .filter_map(|(index, edge)| {
            if edge.a < node_count && edge.b < node_count {
                Some(*edge)
            } else {
                warn!(
                    edge = index,
                    a = edge.a,
                    b = edge.b,
                    node_count,
                    "Skipping edge that references a missing node."
                );
                None
            }
        })
        .collect()
}

/// Cycle count and ring-size heuristic from the spanning-tree surplus.
pub fn detect_cycles(node_count: usize, edge_count: usize) -> (usize, usize) {
    if edge_count > 0 && edge_count >= node_count {
        (
            edge_count - node_count + 1,
            node_count.min(TYPICAL_MAX_RING),
        )
    } else {
        (0, 0)
    }
}

/// Fraction of double or delocalized edges, boosted inside rings.
pub fn conjugation(edges: &[Edge], cycle_count: usize) -> f64 {
    if edges.is_empty() {
        return 0.0;
    }

    let double = edges.iter().filter(|edge| edge.is_double()).count();
    let fractional = edges.iter().filter(|edge| edge.is_fractional()).count();
    let ratio = (double + fractional) as f64 / edges.len() as f64;

    if cycle_count > 0 && fractional > 0 {
        (0.8 + ratio * 0.2).min(1.0)
    } else if cycle_count > 0 && ratio > 0.3 {
        (ratio + 0.3).min(1.0)
    } else {
        ratio
    }
}

/// Triangle count over the adjacency sets, normalized by the maximum
/// possible number of triangles for `node_count` nodes.
///
/// Every triangle is seen once from each of its three edges.
pub fn clustering(node_count: usize, edges: &[Edge]) -> f64 {
    if node_count < 3 {
        return 0.0;
    }

    let mut adjacency = vec![BTreeSet::new(); node_count];
    for edge in edges.iter().filter(|edge| edge.a != edge.b) {
        adjacency[edge.a].insert(edge.b);
        adjacency[edge.b].insert(edge.a);
    }

    let shared_neighbours: usize = adjacency
        .iter()
        .enumerate()
        .flat_map(|(i, neighbours)| neighbours.range(i + 1..).map(move |&j| (i, j)))
        .map(|(i, j)| adjacency[i].intersection(&adjacency[j]).count())
        .sum();
    let triangles = shared_neighbours / 3;

    let max_triangles = (node_count * (node_count - 1) * (node_count - 2)) as f64 / 6.0;
    triangles as f64 / max_triangles
}
