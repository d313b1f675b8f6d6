//! Degree profiles of gene networks.

use crate::edge::EdgeSet;
use crate::graph::GeneGraph;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One row of a [`DegreeTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub node: String,
    pub degree: usize,
}

/// Degree of every node of a network, one entry per node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DegreeTable {
    degrees: BTreeMap<String, usize>,
}

impl DegreeTable {
    /// Counts, for every endpoint, the distinct edges incident to it.
    /// A self-loop is one incident edge.
    pub fn from_edges(edges: &EdgeSet) -> DegreeTable {
        let mut degrees = BTreeMap::new();
        for edge in edges {
            *degrees.entry(edge.low().to_string()).or_insert(0) += 1;
            if !edge.is_self_loop() {
                *degrees.entry(edge.high().to_string()).or_insert(0) += 1;
            }
        }
        DegreeTable { degrees }
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn degree(&self, node: &str) -> Option<usize> {
        self.degrees.get(node).copied()
    }

    /// Largest degree, or 0 for an empty table.
    pub fn max_degree(&self) -> usize {
        self.degrees.values().copied().max().unwrap_or(0)
    }

    /// Sum over all degrees. Equals twice the edge count for loop-free input.
    pub fn total_degree(&self) -> usize {
        self.degrees.values().sum()
    }

    pub fn nodes_with_degree(&self, degree: usize) -> BTreeSet<&str> {
        self.degrees
            .iter()
            .filter(|&(_, &d)| d == degree)
            .map(|(node, _)| node.as_str())
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = DegreeEntry> + '_ {
        self.degrees.iter().map(|(node, &degree)| DegreeEntry {
            node: node.clone(),
            degree,
        })
    }
}

impl GeneGraph {
    /// Degree table read off the adjacency. Agrees with
    /// [`DegreeTable::from_edges`] on the graph's edge set.
    pub fn degree_table(&self) -> DegreeTable {
        DegreeTable {
            degrees: self
                .node_ids()
                .map(|n| (self.label(n).to_string(), self.node_degree(n)))
                .collect(),
        }
    }
}
