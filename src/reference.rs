use serde::Serialize;

/// Which network supplies the denominator of an identity percentage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Reference {
    /// Divide by the size of the first network
    A,

    /// Divide by the size of the second network
    B,
}
