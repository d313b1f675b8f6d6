//! Simple paths of a fixed length and identity over path sets.
//!
//! Enumeration starts a depth-first walk from every node and never revisits a
//! node within one path. The number of simple paths grows combinatorially
//! with length and density, so every walk is bounded by a path length and by
//! a hard cap on the number of paths visited.

use crate::config::{ComparisonConfig, PathOrientation};
use crate::error::{ComparisonError, Result};
use crate::graph::{GeneGraph, NodeId};
use crate::identity::{IdentityReport, Overlap};
use petgraph::graphmap::Neighbors;
use petgraph::Undirected;
use serde::Serialize;
use std::collections::btree_set::{self, BTreeSet};
use std::fmt;
use tracing::{debug, warn};

/// An ordered sequence of distinct node identifiers joined by edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<String>,
}

impl Path {
    pub fn new<S: Into<String>>(nodes: Vec<S>) -> Path {
        Path {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    fn from_ids(graph: &GeneGraph, ids: &[NodeId]) -> Path {
        Path {
            nodes: ids.iter().map(|&n| graph.label(n).to_string()).collect(),
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() < 2
    }

    pub fn reversed(&self) -> Path {
        Path {
            nodes: self.nodes.iter().rev().cloned().collect(),
        }
    }

    /// The smaller of this path and its reverse.
    pub fn canonical(self) -> Path {
        let reversed = self.reversed();
        if reversed < self {
            reversed
        } else {
            self
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join("-"))
    }
}

/// All distinct path keys of one length found in a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSet {
    length: usize,
    paths: BTreeSet<Path>,
}

impl PathSet {
    /// Path length in edges.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<Path> {
        &self.paths
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Walk {
    Continue,
    Stop,
}

/// Visits every simple path with at most `max_edges` edges, from every start
/// node, in depth-first order. Single-node paths are visited too.
///
/// The walk keeps its own stack of neighbor iterators, one per node on the
/// current path, so path length is bounded by memory rather than call depth.
fn walk<F>(graph: &GeneGraph, max_edges: usize, visit: &mut F) -> Result<()>
where
    F: FnMut(&[NodeId]) -> Result<Walk>,
{
    let mut on_path = vec![false; graph.num_nodes()];
    let mut path: Vec<NodeId> = Vec::new();
    let mut frames: Vec<Neighbors<'_, NodeId, Undirected>> = Vec::new();
    for start in graph.node_ids() {
        path.push(start);
        on_path[start as usize] = true;
        if visit(&path)? == Walk::Stop {
            return Ok(());
        }
        frames.push(graph.neighbors(start));

        while let Some(frame) = frames.last_mut() {
            let next = if path.len() > max_edges {
                None
            } else {
                frame.find(|&n| !on_path[n as usize])
            };
            match next {
                Some(next) => {
                    path.push(next);
                    on_path[next as usize] = true;
                    if visit(&path)? == Walk::Stop {
                        return Ok(());
                    }
                    frames.push(graph.neighbors(next));
                }
                None => {
                    frames.pop();
                    if let Some(done) = path.pop() {
                        on_path[done as usize] = false;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Enumerates the simple paths of exactly `length` edges.
///
/// With `PathOrientation::Directed` a path and its reverse are both kept, as
/// the walk finds one from each end. `max_paths` bounds every path the walk
/// visits, including shorter prefixes; going over it fails with
/// `ComparisonError::PathLimitExceeded` rather than truncating.
pub fn enumerate_paths(
    graph: &GeneGraph,
    length: usize,
    orientation: PathOrientation,
    max_paths: usize,
) -> Result<PathSet> {
    if length == 0 {
        return Err(ComparisonError::ZeroPathLength);
    }
    let mut paths = BTreeSet::new();
    let mut visited = 0usize;
    walk(graph, length, &mut |ids: &[NodeId]| {
        visited += 1;
        if visited > max_paths {
            warn!(length, limit = max_paths, "path enumeration exceeded cap");
            return Err(ComparisonError::PathLimitExceeded {
                length,
                limit: max_paths,
            });
        }
        if ids.len() == length + 1 {
            let path = Path::from_ids(graph, ids);
            let path = match orientation {
                PathOrientation::Directed => path,
                PathOrientation::Canonical => path.canonical(),
            };
            paths.insert(path);
        }
        Ok(Walk::Continue)
    })?;
    debug!(length, paths = paths.len(), "enumerated paths");
    Ok(PathSet { length, paths })
}

/// Length in edges of the longest simple path, looking no further than
/// `cutoff` edges. Zero for a network without edges.
pub fn longest_path_len(graph: &GeneGraph, cutoff: usize, max_paths: usize) -> Result<usize> {
    let mut longest = 0;
    let mut visited = 0usize;
    walk(graph, cutoff, &mut |ids: &[NodeId]| {
        visited += 1;
        if visited > max_paths {
            warn!(cutoff, limit = max_paths, "longest path search exceeded cap");
            return Err(ComparisonError::PathLimitExceeded {
                length: cutoff,
                limit: max_paths,
            });
        }
        longest = longest.max(ids.len() - 1);
        Ok(if longest >= cutoff {
            Walk::Stop
        } else {
            Walk::Continue
        })
    })?;
    Ok(longest)
}

/// Identity over the paths of exactly `length` edges.
///
/// There are no empty-input sentinels here: a side without paths of this
/// length yields `Identity::Undefined` for its reference.
pub fn path_identity(
    a: &GeneGraph,
    b: &GeneGraph,
    length: usize,
    config: &ComparisonConfig,
) -> Result<IdentityReport> {
    let paths_a = enumerate_paths(a, length, config.orientation, config.max_paths)?;
    let paths_b = enumerate_paths(b, length, config.orientation, config.max_paths)?;
    Ok(Overlap::of(paths_a.as_set(), paths_b.as_set()).report())
}
