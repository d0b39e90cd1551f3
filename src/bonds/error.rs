use thiserror::Error;

/// Errors that can occur during bond perception.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The minimum bond distance must be zero or larger.
    ///
    /// Raised before any pairwise work; no partial bond list is produced.
    #[error("minimum bond distance must be >= 0, got {0}")]
    NegativeMinBond(f64),
}
