//! Identity as a function of node degree.

use crate::degree::DegreeTable;
use crate::edge::EdgeSet;
use crate::identity::{edge_identity, Identity, IdentityReport};
use serde::Serialize;
use tracing::debug;

/// Where the values of a curve row came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Both values were computed from the networks.
    Computed,
    /// One side had nothing to compare at this slot; the values are sentinels.
    NotApplicable,
    /// The pre-filled default was never overwritten.
    Placeholder,
    /// Computed, and zero on both sides.
    BothZero,
}

/// One row of the degree-vs-identity table.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct DegreeIdentityRow {
    pub degree: usize,
    pub ref_a: Identity,
    pub ref_b: Identity,
    pub provenance: Provenance,
}

impl DegreeIdentityRow {
    // Slots start at 1%, never 0, so an unwritten slot cannot pass for a
    // computed zero.
    fn placeholder(degree: usize) -> DegreeIdentityRow {
        DegreeIdentityRow {
            degree,
            ref_a: Identity::ratio(1, 100),
            ref_b: Identity::ratio(1, 100),
            provenance: Provenance::Placeholder,
        }
    }

    fn from_report(degree: usize, report: IdentityReport) -> DegreeIdentityRow {
        let provenance = if report.has_empty_input() {
            Provenance::NotApplicable
        } else {
            Provenance::Computed
        };
        DegreeIdentityRow {
            degree,
            ref_a: report.ref_a,
            ref_b: report.ref_b,
            provenance,
        }
    }
}

/// Degree-vs-identity curve for degrees `1..=n`, `n` being the largest
/// degree in either network.
///
/// At degree `i` each network is cut down to the edges touching at least one
/// of its degree-`i` nodes, and the two cuts are compared with
/// [`edge_identity`]. A degree missing from either network gives a
/// `NotApplicable` row.
pub fn degree_identity_curve(a: &EdgeSet, b: &EdgeSet) -> Vec<DegreeIdentityRow> {
    degree_identity_curve_with(
        a,
        &DegreeTable::from_edges(a),
        b,
        &DegreeTable::from_edges(b),
    )
}

/// Like [`degree_identity_curve`], with the degree tables already at hand.
pub fn degree_identity_curve_with(
    a: &EdgeSet,
    degrees_a: &DegreeTable,
    b: &EdgeSet,
    degrees_b: &DegreeTable,
) -> Vec<DegreeIdentityRow> {
    let max_degree = degrees_a.max_degree().max(degrees_b.max_degree());
    let mut rows: Vec<DegreeIdentityRow> =
        (1..=max_degree).map(DegreeIdentityRow::placeholder).collect();

    for row in rows.iter_mut() {
        let degree = row.degree;
        let sub_a = a.touching(&degrees_a.nodes_with_degree(degree));
        let sub_b = b.touching(&degrees_b.nodes_with_degree(degree));
        *row = DegreeIdentityRow::from_report(degree, edge_identity(&sub_a, &sub_b));
        debug!(
            degree,
            edges_a = sub_a.len(),
            edges_b = sub_b.len(),
            ref_a = %row.ref_a,
            ref_b = %row.ref_b,
            "degree slot"
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> EdgeSet {
        EdgeSet::from_pairs(pairs.iter().cloned())
    }

    #[test]
    fn test_placeholder_is_one_percent() {
        let row = DegreeIdentityRow::placeholder(3);
        assert_eq!(Some(1.0), row.ref_a.percent());
        assert!(!row.ref_a.is_zero());
    }

    #[test]
    fn test_curve_covers_every_degree() {
        let a = edges(&[("g1", "g2"), ("g2", "g3")]);
        let b = edges(&[("g1", "g2"), ("g2", "g3"), ("g3", "g4")]);
        let rows = degree_identity_curve(&a, &b);
        assert_eq!(vec![1, 2], rows.iter().map(|r| r.degree).collect::<Vec<_>>());
        assert!(rows.iter().all(|r| r.provenance != Provenance::Placeholder));

        // degree 1: A-ends g1,g3 touch both A edges; B-ends g1,g4 touch g1-g2 and g3-g4.
        assert_eq!(Provenance::Computed, rows[0].provenance);
        assert_eq!(Some(50.0), rows[0].ref_a.percent());
        assert_eq!(Some(50.0), rows[0].ref_b.percent());

        // degree 2: A has g2, B has g2 and g3, every edge qualifies.
        assert_eq!(Some(100.0), rows[1].ref_a.percent());
    }

    #[test]
    fn test_missing_degree_is_not_applicable() {
        let a = edges(&[("g1", "g2"), ("g2", "g3")]);
        let b = edges(&[("g4", "g5")]);
        let rows = degree_identity_curve(&a, &b);
        assert_eq!(2, rows.len());

        assert_eq!(Provenance::Computed, rows[0].provenance);
        assert!(rows[0].ref_a.is_zero());
        assert!(rows[0].ref_b.is_zero());

        assert_eq!(Provenance::NotApplicable, rows[1].provenance);
        assert_eq!(Identity::NotApplicable, rows[1].ref_a);
        assert_eq!(Identity::NoNode, rows[1].ref_b);
    }

    #[test]
    fn test_both_empty() {
        assert!(degree_identity_curve(&EdgeSet::new(), &EdgeSet::new()).is_empty());
    }
}
