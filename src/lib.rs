//! Structural identity between two gene-regulatory networks.
//!
//! Both networks are undirected edge lists inferred by different methods.
//! Their overlap is measured as identity percentages: the share of one
//! network's edges (or simple paths of a given length) that the other
//! reproduces, with each network used in turn as the reference.
//!
//! Plotting and table I/O are left to the caller; everything here returns
//! plain result tables.

mod comparison;
mod config;
mod degree;
mod degree_identity;
pub mod edge;
mod error;
pub mod graph;
mod identity;
pub mod path;
mod reference;

pub use {
    comparison::*, config::*, degree::*, degree_identity::*, error::*, identity::*,
    reference::*,
};

use edge::{EdgeSet, RawEdge};

/// Degree-1 identity of two edge tables.
pub fn compare_edges(a: &[RawEdge], b: &[RawEdge]) -> IdentityReport {
    edge_identity(&EdgeSet::from_records(a), &EdgeSet::from_records(b))
}

/// Degree-vs-identity table of two edge tables.
pub fn compare_by_degree(a: &[RawEdge], b: &[RawEdge]) -> Vec<DegreeIdentityRow> {
    degree_identity_curve(&EdgeSet::from_records(a), &EdgeSet::from_records(b))
}

/// Path-length-vs-identity table of two edge tables.
pub fn compare_by_path_length(
    a: &[RawEdge],
    b: &[RawEdge],
    config: ComparisonConfig,
) -> Result<Vec<PathIdentityRow>> {
    NetworkComparison::new(a, b, config)?.path_identity_curve()
}
