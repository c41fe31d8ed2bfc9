use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

/// A connection between two nodes.
///
/// `order` is a bond order: integral for localized bonds, fractional (for
/// example 1.5) for delocalized ones.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub order: f64,
}

impl Edge {
    pub const fn new(a: usize, b: usize, order: f64) -> Self {
        Self { a, b, order }
    }

    pub fn is_fractional(&self) -> bool {
        self.order > 1.0 && self.order < 2.0
    }

    pub fn is_double(&self) -> bool {
        self.order == 2.0
    }
}

/// Capability of exposing a node collection and an edge list.
pub trait GraphLike {
    fn node_count(&self) -> usize;
    fn edges(&self) -> Cow<'_, [Edge]>;
}

/// Anything the crystallization detector can measure.
///
/// Structures without graph topology keep the default `as_graph`, in which
/// case feature extraction falls back to the trivial state.
pub trait Substrate {
    fn as_graph(&self) -> Option<&dyn GraphLike> {
        None
    }

    /// Domain-specific feature values merged into the extracted features.
    fn custom_features(&self) -> BTreeMap<String, f64> {
        BTreeMap::new()
    }
}

/// A substrate with no exposed topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opaque;

impl Substrate for Opaque {}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StructureError {
    #[error("Edge {edge} references node outside 0..{node_count}")]
    EdgeOutOfBounds { edge: usize, node_count: usize },
    #[error("Edge {edge} has unsupported bond order {order}")]
    UnsupportedOrder { edge: usize, order: f64 },
    #[error("No reference energy for bond '{key}'")]
    MissingReference { key: String },
}

#[derive(Debug, Deserialize)]
struct RawGraph {
    atoms: Vec<String>,
    #[serde(default)]
    bonds: Vec<Edge>,
}

/// Labelled nodes joined by bonds, with every edge index validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct MolecularGraph {
    atoms: Vec<String>,
    bonds: Vec<Edge>,
}

impl MolecularGraph {
    pub fn new(atoms: Vec<String>, bonds: Vec<Edge>) -> Result<Self, StructureError> {
        let node_count = atoms.len();
        if let Some(edge) = bonds
            .iter()
            .position(|bond| bond.a >= node_count || bond.b >= node_count)
        {
            return Err(StructureError::EdgeOutOfBounds { edge, node_count });
        }
        Ok(Self { atoms, bonds })
    }

    /// Simple ring of `size` identical atoms joined by bonds of `order`.
    pub fn ring(label: &str, size: usize, order: f64) -> Self {
        let atoms = vec![label.to_string(); size];
        let bonds = (0..size)
            .map(|i| Edge::new(i, (i + 1) % size, order))
            .collect();
        Self { atoms, bonds }
    }

    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Edge] {
        &self.bonds
    }
}

impl TryFrom<RawGraph> for MolecularGraph {
    type Error = StructureError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        Self::new(raw.atoms, raw.bonds)
    }
}

impl GraphLike for MolecularGraph {
    fn node_count(&self) -> usize {
        self.atoms.len()
    }

    fn edges(&self) -> Cow<'_, [Edge]> {
        Cow::Borrowed(&self.bonds)
    }
}

impl Substrate for MolecularGraph {
    fn as_graph(&self) -> Option<&dyn GraphLike> {
        Some(self)
    }
}
