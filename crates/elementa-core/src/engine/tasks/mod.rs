//! Batch computations over many elements.
//!
//! Tasks have no cross-item dependencies, so each one fans out over rayon when
//! the `parallel` feature is enabled and reduces only at the end.

pub mod bond_table;
