//! Sizing arithmetic for the filter.
//!
//! Both formulas truncate toward zero and then clamp to 1:
//!
//! * `m = trunc(-(n * ln p) / ln(2)^2)`
//! * `k = trunc((m / n) * ln 2)`
//!
//! Truncation is observable. For `n = 1000, p = 0.01` it gives `m = 9585`
//! and `k = 6`, where ceiling/rounding would give 9586 and 7.
use crate::config::BloomConfig;
use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// Derived parameters calculated from [`BloomConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomParams {
    pub bit_vector_size: usize,
    pub num_hashes: usize,
}

impl TryFrom<&BloomConfig> for BloomParams {
    type Error = BloomError;

    fn try_from(config: &BloomConfig) -> Result<Self> {
        let bit_vector_size =
            optimal_bit_vector_size(config.capacity, config.false_positive_rate)?;
        let num_hashes = optimal_num_hashes(bit_vector_size, config.capacity)?;

        Ok(Self {
            bit_vector_size,
            num_hashes,
        })
    }
}

/// Number of bits needed to hold `n` items at false positive rate `fpr`.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> Result<usize> {
    check_capacity(n)?;
    check_false_positive_rate(fpr)?;

    let m = -(n as f64) * fpr.ln() / (LN_2 * LN_2);
    // `usize::MAX as f64` rounds up to 2^64, hence `>=`
    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(BloomError::InvalidConfig(format!(
            "Bit vector size overflows for capacity {n} and FPR {fpr}"
        )));
    }

    Ok((m.trunc() as usize).max(1))
}

/// Number of hash probes minimizing the false positive rate for `m` bits
/// and `n` items.
pub fn optimal_num_hashes(m: usize, n: usize) -> Result<usize> {
    check_capacity(n)?;
    if m == 0 {
        return Err(BloomError::InvalidConfig(
            "Bit vector size must be > 0".into(),
        ));
    }

    let k = (m as f64 / n as f64) * LN_2;
    Ok((k.trunc() as usize).max(1))
}

/// Converts a signed item count into a capacity, rejecting zero and
/// negative values.
pub fn parse_capacity(items_count: i64) -> Result<usize> {
    let capacity = usize::try_from(items_count).map_err(|_| {
        BloomError::InvalidConfig(format!(
            "Capacity must be > 0, got {items_count}"
        ))
    })?;
    check_capacity(capacity)?;
    Ok(capacity)
}

pub(crate) fn check_capacity(n: usize) -> Result<()> {
    if n == 0 {
        return Err(BloomError::InvalidConfig("Capacity must be > 0".into()));
    }
    Ok(())
}

pub(crate) fn check_false_positive_rate(fpr: f64) -> Result<()> {
    // Written so that NaN fails too
    if !(fpr > 0.0 && fpr < 1.0) {
        return Err(BloomError::InvalidConfig(format!(
            "FPR must be between 0 and 1, got {fpr}"
        )));
    }
    Ok(())
}
