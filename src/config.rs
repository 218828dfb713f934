use crate::error::Result;
use crate::hash::{HashFunction, default_hash_function};
use crate::params::{check_capacity, check_false_positive_rate};
use derive_builder::Builder;

/// Configuration for [`crate::BloomFilter`]
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomConfig {
    /// Expected number of elements
    #[builder(default = "1_000_000")]
    pub capacity: usize,

    /// Target false positive rate, strictly between 0 and 1
    #[builder(default = "0.01")]
    pub false_positive_rate: f64,

    /// Seeded hash function used for every probe
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl BloomConfig {
    pub fn validate(&self) -> Result<()> {
        check_capacity(self.capacity)?;
        check_false_positive_rate(self.false_positive_rate)
    }
}
