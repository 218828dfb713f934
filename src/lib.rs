//! Classic fixed-size Bloom filter with seeded 32-bit hash probes.
//!
//! A Bloom filter answers "might this item have been added?" using a bit
//! vector of `m` bits and `k` hash probes per item. It never gives a false
//! negative; false positives happen at roughly the configured rate once the
//! filter holds its expected number of items.
//!
//! HowTo:
//!    * Sizing: `m` and `k` are derived once from the expected item count `n`
//!      and target false positive rate `p` (see [`optimal_bit_vector_size`]
//!      and [`optimal_num_hashes`]).
//!    * Insertion: the item is hashed `k` times with seeds `0..k`, each digest
//!      is taken modulo `m` and the bit at that position is set.
//!    * Query: the same `k` positions are read. Any unset bit means the item
//!      was never added.
//!
//! Limitations:
//!     * No deletion. Bits only go from unset to set.
//!     * No resizing. Going past the expected item count raises the false
//!       positive rate.
//!     * No internal locking. Wrap the filter in a `Mutex`/`RwLock` to share
//!       it between threads.
//!     * Hashes are 32 bit and non-cryptographic.
//!
//! ```
//! use seeded_bloom_rs::{BloomFilter, BloomFilterOps};
//!
//! let mut filter = BloomFilter::with_rate(1000, 0.01)?;
//! filter.add(b"alpha")?;
//! assert!(filter.check(b"alpha")?);
//! # Ok::<(), seeded_bloom_rs::BloomError>(())
//! ```

mod bit_store;
pub mod common;
mod config;
mod error;
mod filter;
mod hash;
mod params;
mod traits;

pub use bit_store::BitStore;
pub use config::{BloomConfig, BloomConfigBuilder, BloomConfigBuilderError};
pub use error::{BloomError, Result};
pub use filter::BloomFilter;
pub use hash::{HashFunction, default_hash_function, hash_fnv32, hash_murmur32};
pub use params::{
    BloomParams, optimal_bit_vector_size, optimal_num_hashes, parse_capacity,
};
pub use traits::{BloomFilterOps, BloomFilterStats, BulkBloomFilterOps};
