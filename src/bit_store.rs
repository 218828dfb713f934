use crate::error::{BloomError, Result};
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};

/// Fixed-length bit storage. Bits start unset and can only be set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitStore {
    bits: BitVec<usize, Lsb0>,
}

impl BitStore {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BloomError::InvalidConfig(
                "Bit store size must be > 0".into(),
            ));
        }
        if size > BitSlice::<usize, Lsb0>::MAX_BITS {
            return Err(BloomError::InvalidConfig(format!(
                "Bit store size {size} exceeds addressable bits"
            )));
        }

        Ok(Self {
            bits: bitvec![usize, Lsb0; 0; size],
        })
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.bits
            .get(index)
            .map(|bit| *bit)
            .ok_or(BloomError::IndexOutOfBounds {
                index,
                capacity: self.bits.len(),
            })
    }

    pub fn set(&mut self, index: usize) -> Result<()> {
        if index >= self.bits.len() {
            return Err(BloomError::IndexOutOfBounds {
                index,
                capacity: self.bits.len(),
            });
        }
        self.bits.set(index, true);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false, a store has at least one bit
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_unset() {
        let store = BitStore::new(130).unwrap();
        assert_eq!(store.len(), 130);
        assert_eq!(store.count_ones(), 0);
        for i in 0..130 {
            assert!(!store.get(i).unwrap());
        }
    }

    #[test]
    fn test_zero_size_fails() {
        assert!(matches!(
            BitStore::new(0),
            Err(BloomError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut store = BitStore::new(64).unwrap();
        store.set(7).unwrap();
        let once = store.clone();
        store.set(7).unwrap();
        assert_eq!(store, once);
        assert!(store.get(7).unwrap());
        assert!(!store.get(6).unwrap());
        assert_eq!(store.count_ones(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut store = BitStore::new(10).unwrap();
        assert_eq!(
            store.get(10),
            Err(BloomError::IndexOutOfBounds {
                index: 10,
                capacity: 10
            })
        );
        assert_eq!(
            store.set(42),
            Err(BloomError::IndexOutOfBounds {
                index: 42,
                capacity: 10
            })
        );
        assert!(store.set(9).is_ok());
    }
}
