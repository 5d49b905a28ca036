//! Least Recently Used (LRU) Replacement Policy.
//!
//! Tracks recency with one rank counter per way: `0` marks the way touched
//! most recently and the set's maximum marks the way touched longest ago.
//! An access promotes its way to rank `0` and shifts every way that was more
//! recent up by one, leaving the staler ways untouched. Within a set all
//! ranks stay distinct, except that a second `0` may exist transiently
//! between an eviction and the fill that follows it.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access_update()`: O(W) where W is the number of ways (associativity)
//!   - `get_victim()`: O(W)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::{AccessOutcome, ReplacementPolicy};

/// LRU Policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Per-set recency ranks, one counter per way.
    /// Rank 0 is the most recently used way; the maximum is the victim.
    counters: Vec<Vec<u64>>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// Counters start at `[0, 1, .., ways - 1]` within each set: distinct
    /// ranks with exactly one zero, and never-accessed ways staler the
    /// higher their index.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(num_sets: usize, ways: usize) -> Self {
        let mut counters = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            counters.push((0..ways as u64).collect());
        }
        Self { counters }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Promotes `way` to rank 0.
    ///
    /// A way already at rank 0 is left alone without touching the rest of
    /// the set. This early exit is load-bearing: with two transient zeros
    /// in the set, shifting on a rank-0 re-access would reorder ways that
    /// were never touched.
    fn access_update(&mut self, set: usize, way: usize, _outcome: AccessOutcome) {
        let row = &mut self.counters[set];
        let current = row[way];
        if current == 0 {
            return;
        }
        for (other, counter) in row.iter_mut().enumerate() {
            if other != way && *counter <= current {
                *counter += 1;
            }
        }
        row[way] = 0;
    }

    /// No bookkeeping on eviction; the fill that follows performs the
    /// promotion.
    fn eviction_update(&mut self, _set: usize, _way: usize) {}

    /// Marks `way` staler than everything else in the set.
    ///
    /// The rank becomes one past the set's current maximum rather than
    /// shifting neighbors, so the relative order of the remaining ways is
    /// preserved.
    fn invalidation_update(&mut self, set: usize, way: usize) {
        let row = &mut self.counters[set];
        let stalest = row.iter().copied().max().unwrap_or(0);
        row[way] = stalest + 1;
    }

    /// Returns the way with the largest rank.
    ///
    /// Only a strictly larger rank displaces the candidate, so rank ties
    /// resolve to the lowest way index.
    fn get_victim(&mut self, set: usize) -> usize {
        let row = &self.counters[set];
        let mut victim = 0;
        let mut stalest = 0;
        for (way, &counter) in row.iter().enumerate() {
            if counter > stalest {
                stalest = counter;
                victim = way;
            }
        }
        victim
    }

    fn name(&self) -> &'static str {
        "LRU"
    }
}
