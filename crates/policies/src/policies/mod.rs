//! Cache Replacement Policies.
//!
//! Implements the victim-selection algorithms for set-associative caches.
//! Each policy owns dense per-set/per-way state sized once at construction
//! and is driven by the cache through three update notifications plus a
//! victim query.
//!
//! # Policies
//!
//! - `Lru`: rank counters approximating access recency.
//! - `Lfu`: per-way access-frequency counters.
//! - `Fifo`: insertion order only; access recency is ignored.
//! - `BitPlru`: one reference bit per way with randomized tie-break.
//! - `Rrip`: multi-bit re-reference prediction with a periodic
//!   long/distant insertion schedule.
//!
//! # Call protocol
//!
//! The cache reports a hit with [`ReplacementPolicy::access_update`] alone; a
//! fill into an invalid way with `access_update` (outcome
//! [`AccessOutcome::FillAfterMiss`]); and a replacement of a valid way with
//! [`ReplacementPolicy::eviction_update`] immediately followed by
//! `access_update` for the same way. [`ReplacementPolicy::get_victim`] may
//! only be asked once every way in the set holds a valid line; the cache
//! must prefer invalid ways on its own.

/// Bit-based pseudo-LRU replacement policy.
pub mod bit_plru;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Re-Reference Interval Prediction replacement policy.
pub mod rrip;

pub use bit_plru::BitPlruPolicy;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use rrip::RripPolicy;

/// Outcome of a cache access, as seen by the cache container.
///
/// Most disciplines rank ways the same way regardless of how the line got
/// there and ignore this value; RRIP inserts missed lines at a predicted
/// re-reference distance and therefore must know which case it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The way already held the requested line.
    Hit,
    /// The way is being filled with a new line after a miss.
    FillAfterMiss,
}

/// Trait for cache replacement policies.
///
/// All operations take a 0-based set index and, where applicable, a 0-based
/// way index below the associativity. Out-of-range indices are a caller bug;
/// implementations are free to panic on them in debug builds and are not
/// required to behave meaningfully in release builds.
pub trait ReplacementPolicy: Send + Sync {
    /// Updates the policy state when a way is accessed.
    ///
    /// Covers both hits and fills; `outcome` says which. For a replacement
    /// of a valid line this call follows [`Self::eviction_update`] on the
    /// same `(set, way)`.
    fn access_update(&mut self, set: usize, way: usize, outcome: AccessOutcome);

    /// Updates the policy state when `way` is chosen as a victim and its
    /// line is about to be replaced.
    ///
    /// The subsequent fill arrives as a separate [`Self::access_update`].
    /// May be invoked for a way that never held a valid line (cold fill);
    /// implementations tolerate this.
    fn eviction_update(&mut self, set: usize, way: usize);

    /// Updates the policy state when `way`'s line is invalidated outside the
    /// evict/fill cycle (e.g., a coherence invalidation).
    ///
    /// No `access_update` follows automatically.
    fn invalidation_update(&mut self, set: usize, way: usize);

    /// Selects the way to evict from `set`.
    ///
    /// The cache must only ask once every way in the set is valid. The
    /// returned index is below the associativity.
    fn get_victim(&mut self, set: usize) -> usize;

    /// Stable identifier for this discipline, matching the name accepted by
    /// [`create`].
    fn name(&self) -> &'static str;
}

/// Constructs a replacement policy from its configuration-file name.
///
/// Recognized names are `"LRU"` (also the empty string), `"LFU"`, `"FIFO"`,
/// `"BIT_PLRU"`, and `"RRIP"`. Any other string yields `None`; the caller is
/// expected to surface an unsupported-policy error and abort configuration.
///
/// One policy instance serves exactly one cache; when simulating several
/// caches (e.g., one L1 per core), call this once per cache.
pub fn create(
    name: &str,
    num_sets: usize,
    associativity: usize,
) -> Option<Box<dyn ReplacementPolicy>> {
    let policy: Box<dyn ReplacementPolicy> = match name {
        "" | "LRU" => Box::new(LruPolicy::new(num_sets, associativity)),
        "LFU" => Box::new(LfuPolicy::new(num_sets, associativity)),
        "FIFO" => Box::new(FifoPolicy::new(num_sets, associativity)),
        "BIT_PLRU" => Box::new(BitPlruPolicy::new(num_sets, associativity)),
        "RRIP" => Box::new(RripPolicy::new(num_sets, associativity)),
        _ => return None,
    };
    tracing::debug!(
        policy = policy.name(),
        num_sets,
        associativity,
        "constructed replacement policy"
    );
    Some(policy)
}
