//! Configuration surface for the replacement-policy engine.
//!
//! This module defines the structures a simulator deserializes from its
//! cache configuration (JSON or equivalent) to pick a policy and size it:
//! 1. **Defaults:** baseline cache geometry constants.
//! 2. **`PolicyKind`:** the policy selector, accepting the canonical
//!    uppercase names used in configuration files.
//! 3. **`PolicyConfig`:** geometry knobs plus the selector, deriving the
//!    set count the policy is sized with.
//!
//! The address-to-set mapping and hit/miss logic stay in the cache; only
//! the derived `num_sets`/`ways` pair crosses into this subsystem.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PolicyError;
use crate::policies::{self, ReplacementPolicy};

/// Default configuration constants for cache geometry.
///
/// These values define the baseline geometry when not explicitly
/// overridden in the configuration file.
mod defaults {
    /// Default cache size in bytes (4 KiB).
    pub const CACHE_SIZE: usize = 4096;

    /// Default cache line size in bytes (64 bytes).
    ///
    /// Matches typical modern processor cache line sizes.
    pub const CACHE_LINE: usize = 64;

    /// Default cache associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;
}

/// Replacement-policy selector.
///
/// Deserializes from the canonical uppercase names used in configuration
/// files (`"LRU"`, `"LFU"`, `"FIFO"`, `"BIT_PLRU"`, `"RRIP"`), with
/// PascalCase aliases for hand-written configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// Least Recently Used: rank counters approximating access recency.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used: per-way access counts.
    #[serde(alias = "Lfu")]
    Lfu,
    /// First In First Out: installation order only.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Bit-based pseudo-LRU: reference bits with random tie-break.
    #[serde(rename = "BIT_PLRU", alias = "BitPlru")]
    BitPlru,
    /// Re-Reference Interval Prediction: multi-bit staleness prediction.
    #[serde(alias = "Rrip")]
    Rrip,
}

impl PolicyKind {
    /// Returns the canonical configuration-file name for this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
            Self::Fifo => "FIFO",
            Self::BitPlru => "BIT_PLRU",
            Self::Rrip => "RRIP",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    /// Parses a configuration-file policy name.
    ///
    /// The empty string selects LRU, matching the factory's treatment of an
    /// absent policy knob.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnknownPolicy`] for any unrecognized name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "" | "LRU" => Ok(Self::Lru),
            "LFU" => Ok(Self::Lfu),
            "FIFO" => Ok(Self::Fifo),
            "BIT_PLRU" => Ok(Self::BitPlru),
            "RRIP" => Ok(Self::Rrip),
            _ => Err(PolicyError::UnknownPolicy(name.to_owned())),
        }
    }
}

/// Cache geometry and policy selection for one cache instance.
///
/// # Examples
///
/// Deserializing a cache's policy block from JSON:
///
/// ```
/// use waysim_policies::config::{PolicyConfig, PolicyKind};
///
/// let json = r#"{
///     "size_bytes": 32768,
///     "line_bytes": 64,
///     "ways": 4,
///     "policy": "RRIP"
/// }"#;
///
/// let config: PolicyConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.policy, PolicyKind::Rrip);
/// assert_eq!(config.num_sets(), 128);
///
/// let policy = config.build().unwrap();
/// assert_eq!(policy.name(), "RRIP");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Total cache size in bytes
    #[serde(default = "PolicyConfig::default_size")]
    pub size_bytes: usize,

    /// Cache line size in bytes
    #[serde(default = "PolicyConfig::default_line")]
    pub line_bytes: usize,

    /// Associativity (number of ways)
    #[serde(default = "PolicyConfig::default_ways")]
    pub ways: usize,

    /// Replacement policy
    #[serde(default)]
    pub policy: PolicyKind,

    /// Fixed tie-break seed for Bit-PLRU; other policies ignore it.
    /// Absent means seed from entropy (victim choices vary run to run).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PolicyConfig {
    /// Returns the default cache size in bytes.
    fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default cache line size in bytes.
    fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Returns the default cache associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Derives the set count from the size, line, and ways knobs.
    ///
    /// Zero line size or zero ways yield zero sets rather than dividing by
    /// zero; [`Self::build`] rejects that geometry.
    pub const fn num_sets(&self) -> usize {
        if self.line_bytes == 0 || self.ways == 0 {
            0
        } else {
            self.size_bytes / self.line_bytes / self.ways
        }
    }

    /// Constructs the configured policy, sized for this geometry.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidGeometry`] when the knobs collapse to
    /// zero sets or zero ways.
    pub fn build(&self) -> Result<Box<dyn ReplacementPolicy>, PolicyError> {
        let num_sets = self.num_sets();
        if num_sets == 0 || self.ways == 0 {
            return Err(PolicyError::InvalidGeometry {
                num_sets,
                associativity: self.ways,
            });
        }
        let policy: Box<dyn ReplacementPolicy> = match (self.policy, self.seed) {
            (PolicyKind::BitPlru, Some(seed)) => Box::new(
                policies::BitPlruPolicy::with_seed(num_sets, self.ways, seed),
            ),
            (kind, _) => match policies::create(kind.as_str(), num_sets, self.ways) {
                Some(policy) => policy,
                // as_str only produces recognized names
                None => return Err(PolicyError::UnknownPolicy(kind.as_str().to_owned())),
            },
        };
        Ok(policy)
    }
}

impl Default for PolicyConfig {
    /// Creates a default policy configuration.
    ///
    /// Direct-mapped 4 KiB geometry with LRU and entropy seeding.
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            line_bytes: defaults::CACHE_LINE,
            ways: defaults::CACHE_WAYS,
            policy: PolicyKind::default(),
            seed: None,
        }
    }
}
