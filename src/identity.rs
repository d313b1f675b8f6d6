//! Identity percentages between two sets of structural elements.
//!
//! An identity percentage is the share of one network's elements (edges or
//! paths) that the other network reproduces. It is asymmetric: each network is
//! used once as the reference, i.e. as the denominator. This is a set-overlap
//! ratio, not a Jaccard index.

use crate::edge::EdgeSet;
use crate::reference::Reference;
use closed01::Closed01;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Outcome of one identity computation.
///
/// Only `Ratio` is numeric. Callers must branch on the other variants before
/// plotting or averaging.
#[derive(Debug, Copy, Clone)]
pub enum Identity {
    /// Share of the reference reproduced by the other side, in `[0, 1]`.
    Ratio(Closed01<f32>),
    /// The reference side has no elements (`"NO_NODE"`).
    NoNode,
    /// The other side is the empty one, so the ratio does not apply (`"/"`).
    NotApplicable,
    /// Zero denominator outside of the empty-input sentinels.
    Undefined,
}

impl Identity {
    /// `matched / total`, or `Undefined` when `total` is zero.
    pub fn ratio(matched: usize, total: usize) -> Identity {
        if total == 0 {
            return Identity::Undefined;
        }
        debug_assert!(matched <= total);
        Identity::Ratio(Closed01::new(matched as f32 / total as f32))
    }

    /// The identity as a percentage in `[0, 100]`, if it is numeric.
    pub fn percent(&self) -> Option<f32> {
        match *self {
            Identity::Ratio(r) => Some(r.get() * 100.0),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(*self, Identity::Ratio(_))
    }

    /// `NoNode` or `NotApplicable`.
    pub fn is_empty_input(&self) -> bool {
        matches!(*self, Identity::NoNode | Identity::NotApplicable)
    }

    /// A computed ratio of exactly zero. Sentinels are never zero.
    pub fn is_zero(&self) -> bool {
        self.percent().map_or(false, |p| p == 0.0)
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Identity) -> bool {
        match (self, other) {
            (Identity::Ratio(a), Identity::Ratio(b)) => a.get() == b.get(),
            (Identity::NoNode, Identity::NoNode)
            | (Identity::NotApplicable, Identity::NotApplicable)
            | (Identity::Undefined, Identity::Undefined) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Identity::Ratio(r) => write!(f, "{:.1}", r.get() * 100.0),
            Identity::NoNode => f.write_str("NO_NODE"),
            Identity::NotApplicable => f.write_str("/"),
            Identity::Undefined => f.write_str("NaN"),
        }
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Identity::Ratio(r) => serializer.serialize_f32(r.get() * 100.0),
            Identity::NoNode => serializer.serialize_str("NO_NODE"),
            Identity::NotApplicable => serializer.serialize_str("/"),
            Identity::Undefined => serializer.serialize_str("NaN"),
        }
    }
}

/// Identity of two networks, once with each as reference.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct IdentityReport {
    /// Elements of A reproduced by B, over |A|.
    pub ref_a: Identity,
    /// Elements of B reproduced by A, over |B|.
    pub ref_b: Identity,
}

impl IdentityReport {
    pub fn new(ref_a: Identity, ref_b: Identity) -> IdentityReport {
        IdentityReport { ref_a, ref_b }
    }

    /// Sentinel pair for an empty side. When both sides are empty, A wins.
    pub fn empty_side(empty: Reference) -> IdentityReport {
        match empty {
            Reference::A => IdentityReport::new(Identity::NoNode, Identity::NotApplicable),
            Reference::B => IdentityReport::new(Identity::NotApplicable, Identity::NoNode),
        }
    }

    pub fn has_empty_input(&self) -> bool {
        self.ref_a.is_empty_input() || self.ref_b.is_empty_input()
    }

    pub fn both_zero(&self) -> bool {
        self.ref_a.is_zero() && self.ref_b.is_zero()
    }
}

/// Set-difference bookkeeping between element sets `A` and `B`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub len_a: usize,
    pub len_b: usize,
    /// Elements of B reproduced by A: `|B| - |B \ A|`.
    pub matched_a: usize,
    /// Elements of A reproduced by B: `|A| - |A \ B|`.
    pub matched_b: usize,
}

impl Overlap {
    pub fn of<K: Ord>(a: &BTreeSet<K>, b: &BTreeSet<K>) -> Overlap {
        let diff_a = b.difference(a).count();
        let diff_b = a.difference(b).count();
        Overlap {
            len_a: a.len(),
            len_b: b.len(),
            matched_a: b.len() - diff_a,
            matched_b: a.len() - diff_b,
        }
    }

    /// Percentages without empty-input sentinels. A zero-sized side yields
    /// `Identity::Undefined`.
    pub fn report(&self) -> IdentityReport {
        IdentityReport::new(
            Identity::ratio(self.matched_a, self.len_a),
            Identity::ratio(self.matched_b, self.len_b),
        )
    }
}

/// Degree-1 identity: the share of each edge set reproduced by the other.
pub fn edge_identity(a: &EdgeSet, b: &EdgeSet) -> IdentityReport {
    if a.is_empty() {
        return IdentityReport::empty_side(Reference::A);
    }
    if b.is_empty() {
        return IdentityReport::empty_side(Reference::B);
    }
    Overlap::of(a.as_set(), b.as_set()).report()
}
