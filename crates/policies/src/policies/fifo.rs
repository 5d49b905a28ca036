//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Orders ways purely by installation recency: the way whose line has been
//! resident longest is the next victim, no matter how often it hits. Each
//! set keeps an explicit order list rather than a wrapping cursor, because
//! evictions can land on any way (the cache fills invalid ways in its own
//! order on cold start) and the evicted way must requeue at the back from
//! wherever it sat.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `eviction_update()`: O(W) where W is the number of ways (associativity)
//!   - `get_victim()`: O(1)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (hot lines are
//!   evicted on schedule regardless of use)

use super::{AccessOutcome, ReplacementPolicy};

/// FIFO Policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Per-set way order. The front is the next victim; the back is the
    /// most recently installed way.
    order: Vec<Vec<usize>>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// Each set starts in ascending way order, so cold sets are consumed
    /// front to back.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(num_sets: usize, ways: usize) -> Self {
        let mut order = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            order.push((0..ways).collect());
        }
        Self { order }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// No-op; FIFO order is insensitive to access recency.
    fn access_update(&mut self, _set: usize, _way: usize, _outcome: AccessOutcome) {}

    /// Requeues `way` at the back of the set's order.
    ///
    /// The way being replaced becomes the most recently installed and hence
    /// the least imminent victim.
    fn eviction_update(&mut self, set: usize, way: usize) {
        let queue = &mut self.order[set];
        if let Some(pos) = queue.iter().position(|&w| w == way) {
            queue.remove(pos);
        }
        queue.push(way);
    }

    /// No-op; an invalidated way keeps its place in line.
    fn invalidation_update(&mut self, _set: usize, _way: usize) {}

    /// Returns the way at the front of the set's order.
    fn get_victim(&mut self, set: usize) -> usize {
        self.order[set][0]
    }

    fn name(&self) -> &'static str {
        "FIFO"
    }
}
