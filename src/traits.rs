use crate::error::Result;

pub trait BloomFilterOps {
    /// Sets every bit position derived from `item`.
    fn add(&mut self, item: &[u8]) -> Result<()>;
    /// `false` means definitely never added, `true` means probably added.
    fn check(&self, item: &[u8]) -> Result<bool>;
}

pub trait BloomFilterStats {
    fn capacity(&self) -> usize;
    fn false_positive_rate(&self) -> f64;
    fn bit_vector_size(&self) -> usize;
    fn num_hashes(&self) -> usize;
    /// Number of `add` calls, duplicates included
    fn insert_count(&self) -> usize;
    fn bits_set(&self) -> usize;

    fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.bit_vector_size() as f64
    }

    /// Chance that a random non-member passes `check` given the bits set so
    /// far, assuming uniformly distributed probes.
    fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.num_hashes() as i32)
    }
}

pub trait BulkBloomFilterOps {
    fn add_all(&mut self, items: &[&[u8]]) -> Result<()>;
    fn check_all(&self, items: &[&[u8]]) -> Result<Vec<bool>>;
}
