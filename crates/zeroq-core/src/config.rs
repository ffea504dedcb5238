//! Library configuration that downstream crates can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static GLOBAL: Lazy<QueryConfig> = Lazy::new(|| {
    let cfg = QueryConfig::from_env();
    match cfg.validate() {
        Ok(()) => cfg,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "invalid ZEROQ_* environment, using defaults");
            QueryConfig::default()
        }
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Optional seed for the process-wide shuffle RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Initial bucket count of a lookup table. Rounded up to a power of two.
    pub lookup_initial_buckets: usize,

    /// First physical capacity of a growable ring buffer before it doubles.
    pub ring_buffer_initial_capacity: usize,

    /// Size of the first segment used when collecting a sequence of unknown length.
    pub segment_initial_capacity: usize,

    /// Shuffle+take switches to reservoir sampling when `take * ratio <= count`.
    pub shuffle_reservoir_ratio: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lookup_initial_buckets: 8,
            ring_buffer_initial_capacity: 4,
            segment_initial_capacity: 16,
            shuffle_reservoir_ratio: 4,
        }
    }
}

impl QueryConfig {
    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static QueryConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ZEROQ_SEED`: shuffle RNG seed
    /// - `ZEROQ_LOOKUP_INITIAL_BUCKETS`: initial lookup bucket count
    /// - `ZEROQ_RING_BUFFER_INITIAL_CAPACITY`: first ring buffer capacity
    /// - `ZEROQ_SEGMENT_INITIAL_CAPACITY`: first builder segment size
    /// - `ZEROQ_SHUFFLE_RESERVOIR_RATIO`: reservoir switch-over ratio
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ZEROQ_SEED") {
            if let Ok(v) = s.parse::<u64>() {
                cfg.seed = Some(v);
            }
        }

        if let Ok(s) = std::env::var("ZEROQ_LOOKUP_INITIAL_BUCKETS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.lookup_initial_buckets = v;
            }
        }

        if let Ok(s) = std::env::var("ZEROQ_RING_BUFFER_INITIAL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.ring_buffer_initial_capacity = v;
            }
        }

        if let Ok(s) = std::env::var("ZEROQ_SEGMENT_INITIAL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.segment_initial_capacity = v;
            }
        }

        if let Ok(s) = std::env::var("ZEROQ_SHUFFLE_RESERVOIR_RATIO") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.shuffle_reservoir_ratio = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: QueryConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup_initial_buckets == 0 {
            return Err(Error::Config("lookup_initial_buckets must be > 0".into()));
        }
        if self.ring_buffer_initial_capacity == 0 {
            return Err(Error::Config(
                "ring_buffer_initial_capacity must be > 0".into(),
            ));
        }
        if self.segment_initial_capacity == 0 {
            return Err(Error::Config("segment_initial_capacity must be > 0".into()));
        }
        if self.shuffle_reservoir_ratio == 0 {
            return Err(Error::Config("shuffle_reservoir_ratio must be > 0".into()));
        }
        Ok(())
    }

    /// `lookup_initial_buckets` rounded up to a power of two.
    pub fn lookup_bucket_count(&self) -> usize {
        self.lookup_initial_buckets.max(1).next_power_of_two()
    }
}
