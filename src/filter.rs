use crate::bit_store::BitStore;
use crate::config::{BloomConfig, BloomConfigBuilder};
use crate::error::{BloomError, Result};
use crate::params::BloomParams;
use crate::traits::{BloomFilterOps, BloomFilterStats, BulkBloomFilterOps};
use tracing::{debug, error};

/// Fixed-size Bloom filter over an in-memory bit store.
///
/// Each operation runs `num_hashes` probes; probe `i` calls the configured
/// hash function with seed `i` and reduces the digest modulo the bit vector
/// size. Bits are never cleared, so once `check` returns `true` for an item
/// it keeps returning `true`.
///
/// `add` needs `&mut self`. Sharing a filter between threads means wrapping
/// it in a lock; there is no internal synchronization.
pub struct BloomFilter {
    config: BloomConfig,
    params: BloomParams,
    bits: BitStore,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(config: BloomConfig) -> Result<Self> {
        config.validate()?;

        let params = BloomParams::try_from(&config)?;
        let bits = BitStore::new(params.bit_vector_size)?;

        debug!(
            capacity = config.capacity,
            false_positive_rate = config.false_positive_rate,
            bit_vector_size = params.bit_vector_size,
            num_hashes = params.num_hashes,
            "Created bloom filter"
        );

        Ok(Self {
            config,
            params,
            bits,
            insert_count: 0,
        })
    }

    /// Filter for `capacity` items at `false_positive_rate`, hashed with
    /// the default hash function.
    pub fn with_rate(capacity: usize, false_positive_rate: f64) -> Result<Self> {
        let config = BloomConfigBuilder::default()
            .capacity(capacity)
            .false_positive_rate(false_positive_rate)
            .build()
            .map_err(|e| BloomError::InvalidConfig(e.to_string()))?;

        Self::new(config)
    }

    pub fn config(&self) -> &BloomConfig {
        &self.config
    }

    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    pub fn bits(&self) -> &BitStore {
        &self.bits
    }

    fn digest(&self, item: &[u8], seed: u32) -> usize {
        let m = self.params.bit_vector_size as u64;
        ((self.config.hash_function)(item, seed) as u64 % m) as usize
    }
}

impl BloomFilterOps for BloomFilter {
    /// A failing probe leaves the bits of the earlier probes set. That can
    /// only happen with a broken store, since digests are reduced modulo
    /// its length.
    fn add(&mut self, item: &[u8]) -> Result<()> {
        for seed in 0..self.params.num_hashes as u32 {
            let idx = self.digest(item, seed);
            self.bits.set(idx).inspect_err(|e| {
                error!(index = idx, "Failed to set bit: {e}");
            })?;
        }

        self.insert_count += 1;
        Ok(())
    }

    fn check(&self, item: &[u8]) -> Result<bool> {
        for seed in 0..self.params.num_hashes as u32 {
            let idx = self.digest(item, seed);
            let is_set = self.bits.get(idx).inspect_err(|e| {
                error!(index = idx, "Failed to read bit: {e}");
            })?;
            if !is_set {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl BulkBloomFilterOps for BloomFilter {
    fn add_all(&mut self, items: &[&[u8]]) -> Result<()> {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    fn check_all(&self, items: &[&[u8]]) -> Result<Vec<bool>> {
        items.iter().map(|item| self.check(item)).collect()
    }
}

impl BloomFilterStats for BloomFilter {
    fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    fn bit_vector_size(&self) -> usize {
        self.params.bit_vector_size
    }

    fn num_hashes(&self) -> usize {
        self.params.num_hashes
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }

    fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ capacity: {}, false_positive_rate: {}, bit_vector_size: {}, num_hashes: {}, bits_set: {} }}",
            self.config.capacity,
            self.config.false_positive_rate,
            self.params.bit_vector_size,
            self.params.num_hashes,
            self.bits.count_ones()
        )
    }
}
