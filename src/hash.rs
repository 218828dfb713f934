use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the seeded hash function used by the Bloom filter.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
/// - `seed: u32`
///   - The probe number, `0..num_hashes`. Different seeds must give
///     (practically) independent outputs for the same item.
///
/// **Returns:**
///
/// - `u32`
///   - The raw 32-bit digest. The filter reduces it modulo the bit vector
///     size itself, so the function does not need to know the filter shape.
///
/// **Contract:**
///
/// The same `(item, seed)` pair must always produce the same digest. The
/// false positive bound only holds if digests for one item across seeds look
/// uniformly distributed; that is assumed, not checked.
pub type HashFunction = fn(&[u8], u32) -> u32;

/// Seeded 32-bit MurmurHash3 (x86 variant).
pub fn hash_murmur32(item: &[u8], seed: u32) -> u32 {
    let mut cursor = Cursor::new(item);
    murmur3_32(&mut cursor, seed).expect("Failed to compute Murmur3 hash")
}

/// Seeded 32-bit FNV-1a. The seed is mixed in ahead of the item bytes.
pub fn hash_fnv32(item: &[u8], seed: u32) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(&seed.to_le_bytes());
    hasher.write(item);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}

pub fn default_hash_function(item: &[u8], seed: u32) -> u32 {
    hash_murmur32(item, seed)
}
