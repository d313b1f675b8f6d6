use crate::edge::EdgeSet;
use petgraph::graphmap::{Neighbors, UnGraphMap};
use petgraph::Undirected;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Node index type. Our networks never exceed 4 billion genes.
pub type NodeId = u32;

/// An immutable, simple, undirected gene network.
///
/// Node identifiers are interned to dense [`NodeId`]s; adjacency is kept in a
/// petgraph `UnGraphMap`, which hashes neighbor lookups.
#[derive(Debug, Clone)]
pub struct GeneGraph {
    labels: Vec<String>,
    node_map: BTreeMap<String, NodeId>,
    adjacency: UnGraphMap<NodeId, ()>,
}

impl GeneGraph {
    pub fn from_edges(edges: &EdgeSet) -> GeneGraph {
        let mut builder = GraphBuilder::new();
        for edge in edges {
            builder.add_edge(edge.low(), edge.high());
        }
        builder.graph()
    }

    fn empty() -> GeneGraph {
        GeneGraph {
            labels: Vec::new(),
            node_map: BTreeMap::new(),
            adjacency: UnGraphMap::new(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.labels.len() as NodeId
    }

    #[inline]
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node as usize]
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.node_map.get(label).copied()
    }

    #[inline]
    pub fn neighbors(&self, node: NodeId) -> Neighbors<'_, NodeId, Undirected> {
        self.adjacency.neighbors(node)
    }

    /// Number of distinct neighbors. A self-loop counts once.
    #[inline]
    pub fn node_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(a), Some(b)) => self.adjacency.contains_edge(a, b),
            _ => false,
        }
    }

    /// Reconstructs the canonical edge set this graph was built from.
    pub fn edge_set(&self) -> EdgeSet {
        EdgeSet::from_pairs(
            self.adjacency
                .all_edges()
                .map(|(a, b, _)| (self.label(a), self.label(b))),
        )
    }
}

pub struct GraphBuilder {
    // maps node label to index in `labels`.
    node_map: BTreeMap<String, NodeId>,
    graph: GeneGraph,
}

impl GraphBuilder {
    pub fn new() -> GraphBuilder {
        GraphBuilder {
            node_map: BTreeMap::new(),
            graph: GeneGraph::empty(),
        }
    }

    pub fn graph(self) -> GeneGraph {
        let mut graph = self.graph;
        graph.node_map = self.node_map;
        graph
    }

    // returns node index
    pub fn add_node(&mut self, label: &str) -> NodeId {
        match self.node_map.entry(label.to_string()) {
            Entry::Vacant(e) => {
                let next_id = self.graph.labels.len() as NodeId;
                self.graph.labels.push(label.to_string());
                self.graph.adjacency.add_node(next_id);
                e.insert(next_id);
                next_id
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Adds an undirected edge. Adding the same pair twice, in either order,
    /// leaves a single edge.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.adjacency.add_edge(a, b, ());
    }
}

impl Default for GraphBuilder {
    fn default() -> GraphBuilder {
        GraphBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> GeneGraph {
        GeneGraph::from_edges(&EdgeSet::from_pairs(vec![("g1", "g2"), ("g2", "g3")]))
    }

    #[test]
    fn test_nodes_are_union_of_endpoints() {
        let g = path_graph();
        assert_eq!(3, g.num_nodes());
        assert_eq!(2, g.num_edges());
        for label in &["g1", "g2", "g3"] {
            assert!(g.node_id(label).is_some());
        }
        assert_eq!(None, g.node_id("g4"));
    }

    #[test]
    fn test_adjacency_is_undirected() {
        let g = path_graph();
        assert!(g.contains_edge("g1", "g2"));
        assert!(g.contains_edge("g2", "g1"));
        assert!(!g.contains_edge("g1", "g3"));
        let g2 = g.node_id("g2").unwrap();
        assert_eq!(2, g.node_degree(g2));
    }

    #[test]
    fn test_builder_merges_parallel_edges() {
        let mut b = GraphBuilder::new();
        b.add_edge("g1", "g2");
        b.add_edge("g2", "g1");
        let g = b.graph();
        assert_eq!(1, g.num_edges());
        assert_eq!(2, g.num_nodes());
    }

    #[test]
    fn test_empty_graph() {
        let g = GeneGraph::from_edges(&EdgeSet::new());
        assert!(g.is_empty());
        assert_eq!(0, g.num_edges());
        assert_eq!(0, g.node_ids().count());
    }

    #[test]
    fn test_edge_set_round_trips() {
        let edges = EdgeSet::from_pairs(vec![("g3", "g1"), ("g2", "g3"), ("g4", "g4")]);
        assert_eq!(edges, GeneGraph::from_edges(&edges).edge_set());
    }
}
