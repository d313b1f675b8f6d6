mod common;

use grn_identity::edge::{Edge, EdgeSet};
use grn_identity::path::enumerate_paths;
use grn_identity::{
    degree_identity_curve, edge_identity, ComparisonConfig, DegreeTable, NetworkComparison,
    PathOrientation, Provenance, Reference,
};
use proptest::prelude::*;

// Loop-free edge lists over a small gene alphabet, so overlaps are common.
fn edge_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((0u8..10, 0u8..10), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (format!("g{}", a), format!("g{}", b)))
            .collect()
    })
}

fn edge_set() -> impl Strategy<Value = EdgeSet> {
    edge_pairs().prop_map(|pairs| EdgeSet::from_pairs(pairs))
}

proptest! {
    #[test]
    fn canonicalization_ignores_order(pairs in edge_pairs()) {
        let forward = EdgeSet::from_pairs(pairs.clone());
        let reversed = EdgeSet::from_pairs(pairs.iter().rev().map(|(a, b)| (b.clone(), a.clone())));
        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(&forward, &forward.canonicalize());
        for (a, b) in &pairs {
            prop_assert_eq!(Edge::new(a.as_str(), b.as_str()), Edge::new(b.as_str(), a.as_str()));
        }
    }

    #[test]
    fn degrees_satisfy_handshake(edges in edge_set()) {
        let table = DegreeTable::from_edges(&edges);
        prop_assert_eq!(2 * edges.len(), table.total_degree());
        prop_assert_eq!(edges.nodes().len(), table.len());
    }

    #[test]
    fn graph_degrees_match_edge_degrees(edges in edge_set()) {
        let c = NetworkComparison::from_edge_sets(edges.clone(), EdgeSet::new(), ComparisonConfig::default()).unwrap();
        prop_assert_eq!(&DegreeTable::from_edges(&edges), c.degree_table(Reference::A));
    }

    #[test]
    fn network_is_identical_to_itself(edges in edge_set()) {
        prop_assume!(!edges.is_empty());
        let report = edge_identity(&edges, &edges);
        prop_assert_eq!(Some(100.0), report.ref_a.percent());
        prop_assert_eq!(Some(100.0), report.ref_b.percent());
    }

    #[test]
    fn length_one_paths_agree_with_edges(a in edge_set(), b in edge_set()) {
        prop_assume!(!a.is_empty() && !b.is_empty());
        let expected = edge_identity(&a, &b);
        let c = NetworkComparison::from_edge_sets(a, b, ComparisonConfig::default()).unwrap();
        prop_assert_eq!(expected, c.path_identity(1).unwrap());
    }

    #[test]
    fn degree_curve_flags_missing_degrees(a in edge_set(), b in edge_set()) {
        let rows = degree_identity_curve(&a, &b);
        let max_degree = DegreeTable::from_edges(&a).max_degree().max(DegreeTable::from_edges(&b).max_degree());
        prop_assert_eq!(max_degree, rows.len());
        for row in &rows {
            let missing = DegreeTable::from_edges(&a).nodes_with_degree(row.degree).is_empty()
                || DegreeTable::from_edges(&b).nodes_with_degree(row.degree).is_empty();
            if missing {
                prop_assert_eq!(Provenance::NotApplicable, row.provenance);
                prop_assert!(row.ref_a.percent().is_none());
            } else {
                prop_assert_eq!(Provenance::Computed, row.provenance);
                prop_assert!(row.ref_a.percent().is_some());
            }
        }
    }

    #[test]
    fn directed_paths_come_in_reverse_pairs(edges in edge_set(), length in 1usize..4) {
        let c = NetworkComparison::from_edge_sets(edges, EdgeSet::new(), ComparisonConfig::default()).unwrap();
        let graph = c.graph(Reference::A);
        let directed = enumerate_paths(graph, length, PathOrientation::Directed, 1_000_000).unwrap();
        let canonical = enumerate_paths(graph, length, PathOrientation::Canonical, 1_000_000).unwrap();
        prop_assert_eq!(directed.len(), 2 * canonical.len());
        for path in directed.iter() {
            prop_assert!(directed.contains(&path.reversed()));
            prop_assert_eq!(length, path.len());
        }
    }
}
