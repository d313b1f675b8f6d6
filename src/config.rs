//! Tunables for a network comparison.

use crate::error::{ComparisonError, Result};
use serde::{Deserialize, Serialize};

/// How path keys are formed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOrientation {
    /// Every traversal is its own key; `X-Y-Z` and `Z-Y-X` are distinct.
    Directed,
    /// A path and its reverse share one key.
    Canonical,
}

/// How curve slots that come out zero on both sides are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// A path-length slot is only overwritten when at least one side is
    /// non-zero; otherwise the pre-filled 0 stays, flagged `Placeholder`.
    Compatible,
    /// Every slot is overwritten; both-zero slots are flagged `BothZero`.
    Explicit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Longest path (in edges) explored when looking for the longest path of
    /// each network.
    pub path_cutoff: usize,
    /// Most paths, partial or complete, one walk may visit before failing.
    pub max_paths: usize,
    pub orientation: PathOrientation,
    pub slot_policy: SlotPolicy,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            path_cutoff: 8,
            max_paths: 1_000_000,
            orientation: PathOrientation::Directed,
            slot_policy: SlotPolicy::Compatible,
        }
    }
}

impl ComparisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_cutoff(mut self, cutoff: usize) -> Self {
        self.path_cutoff = cutoff;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_orientation(mut self, orientation: PathOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_slot_policy(mut self, policy: SlotPolicy) -> Self {
        self.slot_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.path_cutoff == 0 {
            return Err(ComparisonError::InvalidConfig {
                field: "path_cutoff",
                reason: "must be at least 1",
            });
        }
        if self.max_paths == 0 {
            return Err(ComparisonError::InvalidConfig {
                field: "max_paths",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
