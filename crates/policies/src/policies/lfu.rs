//! Least Frequently Used (LFU) Replacement Policy.
//!
//! Counts how many times each way has been accessed and evicts the coldest
//! one. Counts only ever grow while a line is resident; eviction and
//! invalidation zero the way's count so the incoming line starts cold
//! instead of inheriting its predecessor's popularity.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access_update()`: O(1)
//!   - `get_victim()`: O(W) where W is the number of ways (associativity)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Best Case:** Stable hot sets with a skewed access distribution
//! - **Worst Case:** Phase changes; a formerly hot line lingers until its
//!   count is undercut

use super::{AccessOutcome, ReplacementPolicy};

/// LFU Policy state.
#[derive(Debug)]
pub struct LfuPolicy {
    /// Per-set access counts, one per way. Monotone while resident.
    frequency: Vec<Vec<u64>>,
}

impl LfuPolicy {
    /// Creates a new LFU policy instance.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(num_sets: usize, ways: usize) -> Self {
        Self {
            frequency: vec![vec![0; ways]; num_sets],
        }
    }
}

impl ReplacementPolicy for LfuPolicy {
    /// Counts the access; hits and fills weigh the same.
    fn access_update(&mut self, set: usize, way: usize, _outcome: AccessOutcome) {
        self.frequency[set][way] += 1;
    }

    /// Resets the way's count for the incoming line.
    fn eviction_update(&mut self, set: usize, way: usize) {
        self.frequency[set][way] = 0;
    }

    /// Resets the way's count; the way no longer holds anything worth
    /// keeping warm.
    fn invalidation_update(&mut self, set: usize, way: usize) {
        self.frequency[set][way] = 0;
    }

    /// Returns the way with the smallest count.
    ///
    /// Only a strictly smaller count displaces the candidate, so count ties
    /// resolve to the lowest way index.
    fn get_victim(&mut self, set: usize) -> usize {
        let row = &self.frequency[set];
        let mut victim = 0;
        let mut coldest = row[0];
        for (way, &count) in row.iter().enumerate().skip(1) {
            if count < coldest {
                coldest = count;
                victim = way;
            }
        }
        victim
    }

    fn name(&self) -> &'static str {
        "LFU"
    }
}
