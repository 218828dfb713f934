use seeded_bloom_rs::{
    BloomConfigBuilder, BloomError, BloomFilter, BloomParams,
    optimal_bit_vector_size, optimal_num_hashes, parse_capacity,
};

fn assert_invalid_config(result: seeded_bloom_rs::Result<BloomFilter>, hint: &str) {
    match result {
        Err(BloomError::InvalidConfig(msg)) => {
            assert!(msg.contains(hint), "Unexpected message: {msg}");
        }
        Err(other) => panic!("Expected InvalidConfig, got {other:?}"),
        Ok(filter) => panic!("Expected InvalidConfig, got {filter:?}"),
    }
}

#[cfg(test)]
mod capacity_validation_tests {
    use super::*;

    #[test]
    fn test_zero_capacity_fails() {
        assert_invalid_config(
            BloomFilter::with_rate(0, 0.01),
            "Capacity must be > 0",
        );
    }

    #[test]
    fn test_negative_capacity_fails() {
        let result = parse_capacity(-5)
            .and_then(|capacity| BloomFilter::with_rate(capacity, 0.01));
        assert_invalid_config(result, "Capacity must be > 0");
    }

    #[test]
    fn test_minimum_valid_capacity() {
        let filter = BloomFilter::with_rate(1, 0.01).unwrap();
        // -ln(0.01) / ln(2)^2 = 9.58...
        assert_eq!(filter.params().bit_vector_size, 9);
        assert_eq!(filter.params().num_hashes, 6);
    }
}

#[cfg(test)]
mod false_positive_rate_validation_tests {
    use super::*;

    #[test]
    fn test_zero_fpr_fails() {
        assert_invalid_config(
            BloomFilter::with_rate(1000, 0.0),
            "FPR must be between 0 and 1",
        );
    }

    #[test]
    fn test_one_fpr_fails() {
        assert_invalid_config(
            BloomFilter::with_rate(1000, 1.0),
            "FPR must be between 0 and 1",
        );
    }

    #[test]
    fn test_greater_than_one_fpr_fails() {
        assert_invalid_config(
            BloomFilter::with_rate(1000, 1.5),
            "FPR must be between 0 and 1",
        );
    }

    #[test]
    fn test_negative_and_nan_fpr_fail() {
        assert_invalid_config(
            BloomFilter::with_rate(1000, -0.1),
            "FPR must be between 0 and 1",
        );
        assert_invalid_config(
            BloomFilter::with_rate(1000, f64::NAN),
            "FPR must be between 0 and 1",
        );
    }

    #[test]
    fn test_boundary_adjacent_fpr_succeeds() {
        assert!(BloomFilter::with_rate(1000, 1e-9).is_ok());
        assert!(BloomFilter::with_rate(1000, 0.999).is_ok());
    }
}

#[cfg(test)]
mod sizing_tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!(optimal_bit_vector_size(1000, 0.01).unwrap(), 9585);
        assert_eq!(optimal_num_hashes(9585, 1000).unwrap(), 6);
        assert_eq!(optimal_bit_vector_size(20, 0.05).unwrap(), 124);
        assert_eq!(optimal_num_hashes(124, 20).unwrap(), 4);
    }

    #[test]
    fn test_params_from_config() {
        let config = BloomConfigBuilder::default()
            .capacity(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        let params = BloomParams::try_from(&config).unwrap();
        assert_eq!(
            params,
            BloomParams {
                bit_vector_size: 9585,
                num_hashes: 6
            }
        );
    }

    #[test]
    fn test_huge_request_fails_instead_of_wrapping() {
        let result = BloomFilter::with_rate(usize::MAX, 1e-300);
        assert!(matches!(result, Err(BloomError::InvalidConfig(_))));
    }

    #[test]
    fn test_high_fpr_clamps_to_one_hash() {
        let filter = BloomFilter::with_rate(1000, 0.9).unwrap();
        // m = 219, k = trunc(0.15) clamped to 1
        assert_eq!(filter.params().num_hashes, 1);
        assert!(filter.params().bit_vector_size >= 1);
    }
}
