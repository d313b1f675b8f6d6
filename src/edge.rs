//! Undirected edges in canonical form.

use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};
use std::iter::FromIterator;

/// One row of an input edge table. No orientation is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
}

impl RawEdge {
    pub fn new<S: Into<String>>(from: S, to: S) -> RawEdge {
        RawEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// An unordered pair of node identifiers.
///
/// The endpoints are stored in lexicographic order, so `{a, b}` and `{b, a}`
/// are the same `Edge`. A self-loop is kept as a degenerate pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    low: String,
    high: String,
}

impl Edge {
    pub fn new<S: Into<String>>(from: S, to: S) -> Edge {
        let (from, to) = (from.into(), to.into());
        if from <= to {
            Edge { low: from, high: to }
        } else {
            Edge { low: to, high: from }
        }
    }

    /// The endpoint that sorts first.
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The endpoint that sorts last.
    pub fn high(&self) -> &str {
        &self.high
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

impl<'a> From<&'a RawEdge> for Edge {
    fn from(raw: &'a RawEdge) -> Edge {
        Edge::new(raw.from.as_str(), raw.to.as_str())
    }
}

/// A deduplicated set of canonical edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> EdgeSet {
        EdgeSet::default()
    }

    /// Canonicalizes raw `(from, to)` pairs and drops duplicates.
    pub fn from_pairs<I, S>(pairs: I) -> EdgeSet
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        pairs.into_iter().map(|(from, to)| Edge::new(from, to)).collect()
    }

    /// Canonicalizes an edge table.
    pub fn from_records(records: &[RawEdge]) -> EdgeSet {
        records.iter().map(Edge::from).collect()
    }

    /// Runs the canonicalization again. Always equal to `self`.
    pub fn canonicalize(&self) -> EdgeSet {
        EdgeSet::from_pairs(self.edges.iter().map(|e| (e.high(), e.low())))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// All distinct endpoints, in order.
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|e| vec![e.low(), e.high()])
            .collect()
    }

    /// Edges with at least one endpoint in `nodes`.
    ///
    /// This is an edge neighbourhood, not an induced subgraph.
    pub fn touching(&self, nodes: &BTreeSet<&str>) -> EdgeSet {
        self.edges
            .iter()
            .filter(|e| nodes.contains(e.low()) || nodes.contains(e.high()))
            .cloned()
            .collect()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> EdgeSet {
        EdgeSet {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_pairs_are_one_edge() {
        assert_eq!(Edge::new("g2", "g1"), Edge::new("g1", "g2"));
        let e = Edge::new("tp53", "mdm2");
        assert_eq!("mdm2", e.low());
        assert_eq!("tp53", e.high());
    }

    #[test]
    fn test_duplicates_dropped() {
        let set = EdgeSet::from_pairs(vec![("g1", "g2"), ("g2", "g1"), ("g1", "g2"), ("g2", "g3")]);
        assert_eq!(2, set.len());
        assert!(set.contains(&Edge::new("g3", "g2")));
    }

    #[test]
    fn test_empty_input() {
        let set = EdgeSet::from_records(&[]);
        assert!(set.is_empty());
        assert!(set.nodes().is_empty());
    }

    #[test]
    fn test_self_loop_is_kept() {
        let set = EdgeSet::from_pairs(vec![("g1", "g1")]);
        assert_eq!(1, set.len());
        assert!(set.iter().all(Edge::is_self_loop));
        assert_eq!(1, set.nodes().len());
    }

    #[test]
    fn test_touching_is_edge_neighbourhood() {
        let set = EdgeSet::from_pairs(vec![("g1", "g2"), ("g2", "g3"), ("g3", "g4")]);
        let nodes: BTreeSet<&str> = vec!["g1"].into_iter().collect();
        let sub = set.touching(&nodes);
        assert_eq!(EdgeSet::from_pairs(vec![("g1", "g2")]), sub);

        let nodes: BTreeSet<&str> = vec!["g2", "g4"].into_iter().collect();
        assert_eq!(set, set.touching(&nodes));
    }
}
