//! Error type for the configuration boundary.
//!
//! Hot-path policy operations never fail; the only fallible surfaces are
//! turning an operator-supplied name string into a policy and validating
//! cache geometry before sizing per-set state.

use thiserror::Error;

/// Errors produced while resolving a replacement-policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The policy name did not match any known discipline.
    ///
    /// Callers should surface this as a usage error and abort configuration;
    /// there is no fallback policy for a misspelled name.
    #[error("unsupported replacement policy {0:?}")]
    UnknownPolicy(String),

    /// The derived geometry cannot hold any cache line.
    ///
    /// Raised when size/line/ways knobs collapse to zero sets or zero ways,
    /// which would leave the policy with nothing to rank.
    #[error("degenerate cache geometry: {num_sets} sets x {associativity} ways")]
    InvalidGeometry {
        /// Number of sets derived from the size and line knobs.
        num_sets: usize,
        /// Configured associativity.
        associativity: usize,
    },
}
