//! Replacement-policy engine for set-associative cache and TLB simulators.
//!
//! This crate implements the victim-selection subsystem of a cache simulator:
//! 1. **Policies:** LRU, LFU, FIFO, bit-based pseudo-LRU, and RRIP, all behind
//!    one [`ReplacementPolicy`] trait with exact, non-approximated numeric
//!    behavior so simulation results can be compared against hardware traces.
//! 2. **Factory:** name-string construction ([`policies::create`]) for caches
//!    configured from files or command-line knobs.
//! 3. **Configuration:** serde-deserializable geometry and policy selection
//!    ([`PolicyConfig`]), deriving set count from size/line/ways knobs.
//!
//! The surrounding cache owns set/tag lookup and hit/miss determination; a
//! policy instance only answers "which way dies next" and keeps its per-way
//! bookkeeping current as the cache reports accesses, evictions, and
//! invalidations. One instance per cache, no internal locking.

/// Policy selection and cache-geometry configuration structures.
pub mod config;
/// Library error type for the configuration boundary.
pub mod error;
/// The replacement-policy trait, the five disciplines, and the factory.
pub mod policies;

/// Policy/geometry configuration; deserialize from JSON or use `PolicyConfig::default()`.
pub use crate::config::{PolicyConfig, PolicyKind};
/// Error type surfaced when a policy name or geometry cannot be honored.
pub use crate::error::PolicyError;
/// Core capability contract; implemented by all five disciplines.
pub use crate::policies::{AccessOutcome, ReplacementPolicy};
