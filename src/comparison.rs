//! Comparison of two networks, built once and queried many times.

use crate::config::{ComparisonConfig, SlotPolicy};
use crate::degree::{DegreeEntry, DegreeTable};
use crate::degree_identity::{degree_identity_curve_with, DegreeIdentityRow, Provenance};
use crate::edge::{EdgeSet, RawEdge};
use crate::error::Result;
use crate::graph::GeneGraph;
use crate::identity::{edge_identity, Identity, IdentityReport};
use crate::path::{longest_path_len, path_identity};
use crate::reference::Reference;
use serde::Serialize;
use tracing::{debug, instrument};

/// One row of the path-length-vs-identity table.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PathIdentityRow {
    /// Path length in edges.
    pub length: usize,
    pub ref_a: Identity,
    pub ref_b: Identity,
    pub provenance: Provenance,
}

impl PathIdentityRow {
    fn placeholder(length: usize) -> PathIdentityRow {
        PathIdentityRow {
            length,
            ref_a: Identity::ratio(0, 1),
            ref_b: Identity::ratio(0, 1),
            provenance: Provenance::Placeholder,
        }
    }

    fn from_report(length: usize, report: IdentityReport, provenance: Provenance) -> PathIdentityRow {
        PathIdentityRow {
            length,
            ref_a: report.ref_a,
            ref_b: report.ref_b,
            provenance,
        }
    }
}

/// Everything the comparison produces, ready for plotting or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub degrees_a: Vec<DegreeEntry>,
    pub degrees_b: Vec<DegreeEntry>,
    pub edge_identity: IdentityReport,
    pub degree_curve: Vec<DegreeIdentityRow>,
    pub path_curve: Vec<PathIdentityRow>,
}

/// Two networks with their canonical edges, graphs and degree tables.
///
/// All derived structures are built in [`NetworkComparison::new`]; the query
/// methods never rebuild them.
#[derive(Debug, Clone)]
pub struct NetworkComparison {
    config: ComparisonConfig,
    edges_a: EdgeSet,
    edges_b: EdgeSet,
    graph_a: GeneGraph,
    graph_b: GeneGraph,
    degrees_a: DegreeTable,
    degrees_b: DegreeTable,
}

impl NetworkComparison {
    #[instrument(
        name = "comparison.new",
        err,
        skip_all,
        fields(records_a = a.len(), records_b = b.len())
    )]
    pub fn new(a: &[RawEdge], b: &[RawEdge], config: ComparisonConfig) -> Result<NetworkComparison> {
        NetworkComparison::from_edge_sets(EdgeSet::from_records(a), EdgeSet::from_records(b), config)
    }

    pub fn from_edge_sets(
        edges_a: EdgeSet,
        edges_b: EdgeSet,
        config: ComparisonConfig,
    ) -> Result<NetworkComparison> {
        config.validate()?;
        let graph_a = GeneGraph::from_edges(&edges_a);
        let graph_b = GeneGraph::from_edges(&edges_b);
        debug!(
            nodes_a = graph_a.num_nodes(),
            edges_a = edges_a.len(),
            nodes_b = graph_b.num_nodes(),
            edges_b = edges_b.len(),
            "built networks"
        );
        Ok(NetworkComparison {
            config,
            degrees_a: graph_a.degree_table(),
            degrees_b: graph_b.degree_table(),
            edges_a,
            edges_b,
            graph_a,
            graph_b,
        })
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn edges(&self, side: Reference) -> &EdgeSet {
        match side {
            Reference::A => &self.edges_a,
            Reference::B => &self.edges_b,
        }
    }

    pub fn graph(&self, side: Reference) -> &GeneGraph {
        match side {
            Reference::A => &self.graph_a,
            Reference::B => &self.graph_b,
        }
    }

    pub fn degree_table(&self, side: Reference) -> &DegreeTable {
        match side {
            Reference::A => &self.degrees_a,
            Reference::B => &self.degrees_b,
        }
    }

    /// Degree-1 identity of the two edge sets.
    pub fn edge_identity(&self) -> IdentityReport {
        edge_identity(&self.edges_a, &self.edges_b)
    }

    #[instrument(name = "comparison.degree_identity", skip(self))]
    pub fn degree_identity(&self) -> Vec<DegreeIdentityRow> {
        degree_identity_curve_with(&self.edges_a, &self.degrees_a, &self.edges_b, &self.degrees_b)
    }

    #[instrument(name = "comparison.path_identity", err, skip(self))]
    pub fn path_identity(&self, length: usize) -> Result<IdentityReport> {
        path_identity(&self.graph_a, &self.graph_b, length, &self.config)
    }

    /// Longest simple path (in edges, up to `path_cutoff`) of each network.
    pub fn longest_paths(&self) -> Result<(usize, usize)> {
        let cutoff = self.config.path_cutoff;
        let limit = self.config.max_paths;
        Ok((
            longest_path_len(&self.graph_a, cutoff, limit)?,
            longest_path_len(&self.graph_b, cutoff, limit)?,
        ))
    }

    /// Largest path length present in both networks.
    pub fn max_path_length(&self) -> Result<usize> {
        let (a, b) = self.longest_paths()?;
        Ok(a.min(b))
    }

    /// Path-length-vs-identity curve for lengths `1..=max_path_length()`.
    ///
    /// Slots start at 0 on both sides. Under `SlotPolicy::Compatible` a slot
    /// whose percentages are both zero is left as it was and keeps the
    /// `Placeholder` flag; under `SlotPolicy::Explicit` it is written and
    /// flagged `BothZero`.
    #[instrument(name = "comparison.path_curve", err, skip(self))]
    pub fn path_identity_curve(&self) -> Result<Vec<PathIdentityRow>> {
        let max_length = self.max_path_length()?;
        let mut rows: Vec<PathIdentityRow> =
            (1..=max_length).map(PathIdentityRow::placeholder).collect();

        for row in rows.iter_mut() {
            let length = row.length;
            let report = self.path_identity(length)?;
            if report.both_zero() {
                if self.config.slot_policy == SlotPolicy::Explicit {
                    *row = PathIdentityRow::from_report(length, report, Provenance::BothZero);
                }
            } else {
                let provenance = if report.ref_a.is_numeric() && report.ref_b.is_numeric() {
                    Provenance::Computed
                } else {
                    Provenance::NotApplicable
                };
                *row = PathIdentityRow::from_report(length, report, provenance);
            }
            debug!(length, ref_a = %row.ref_a, ref_b = %row.ref_b, "path slot");
        }
        Ok(rows)
    }

    #[instrument(name = "comparison.report", err, skip(self))]
    pub fn report(&self) -> Result<ComparisonReport> {
        Ok(ComparisonReport {
            degrees_a: self.degrees_a.entries().collect(),
            degrees_b: self.degrees_b.entries().collect(),
            edge_identity: self.edge_identity(),
            degree_curve: self.degree_identity(),
            path_curve: self.path_identity_curve()?,
        })
    }
}
