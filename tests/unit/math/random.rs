//! Tests for the seeded Park-Miller random source

#[cfg(test)]
mod tests {
    use exprart::math::random::{
        MODULUS, ParkMiller, SEED_SCRAMBLE, UnitSource, ZERO_STATE_FLOOR, scramble_seed,
    };
    use rand::RngCore;

    fn states(seed: i64, count: usize) -> Vec<u32> {
        let mut rng = ParkMiller::new(seed);
        (0..count).map(|_| rng.next_u32()).collect()
    }

    // Tests the multiplicative hash applied to seeds
    // Verified by replacing wrapping multiplication with addition
    #[test]
    fn test_scramble_seed_matches_hash() {
        assert_eq!(scramble_seed(0), 0);
        assert_eq!(scramble_seed(1), SEED_SCRAMBLE);
        assert_eq!(scramble_seed(-1), 1_640_531_535);
        assert_eq!(scramble_seed(5), 387_276_917);
    }

    // Tests that only the low 32 bits of the seed matter
    // Verified by hashing the full 64-bit seed
    #[test]
    fn test_seed_uses_32_bit_pattern() {
        assert_eq!(states(-1, 8), states(4_294_967_295, 8));
        assert_eq!(states(7, 8), states(7 + (1_i64 << 32), 8));
    }

    // Tests the recorded Lehmer sequence for small seeds
    // Verified by changing the multiplier
    #[test]
    fn test_known_state_sequences() {
        assert_eq!(states(1, 3), vec![1_276_552_349, 1_653_696_113, 937_211_717]);
        assert_eq!(states(-1, 3), vec![870_964_912, 1_058_738_032, 160_604_782]);
        assert_eq!(states(5, 3), vec![2_087_693_609, 131_178_130, 1_392_609_088]);
    }

    // Tests that unit values are the state divided by the modulus
    // Verified by dividing by 2^31 instead
    #[test]
    fn test_next_unit_divides_state_by_modulus() {
        let mut rng = ParkMiller::new(1);
        let value = rng.next_unit();
        assert!((value - 0.594_441_010_427_866_6).abs() < f64::EPSILON);
        assert!((value - f64::from(rng.state()) / MODULUS as f64).abs() < f64::EPSILON);
    }

    // Tests the zero-state guard for seed 0
    // Verified by removing the floor so the stream is all zeros
    #[test]
    fn test_seed_zero_is_floored_to_nonzero_stream() {
        let rng = ParkMiller::new(0);
        assert_eq!(rng.state(), ZERO_STATE_FLOOR);
        assert_eq!(states(0, 3), vec![16_807, 282_475_249, 1_622_650_073]);
    }

    // Tests seeds whose hash is a nonzero multiple of the modulus
    // Verified by guarding only the literal seed 0
    #[test]
    fn test_seeds_hashing_to_modulus_multiples_are_guarded() {
        assert_eq!(u64::from(scramble_seed(1_903_481_007)), MODULUS);
        assert_eq!(u64::from(scramble_seed(-488_005_282)), 2 * MODULUS);

        let reference = states(0, 16);
        assert_eq!(states(1_903_481_007, 16), reference);
        assert_eq!(states(-488_005_282, 16), reference);
        assert!(reference.iter().all(|&state| state != 0));
    }

    // Tests that every value lies in the half-open unit interval
    // Verified by dividing by modulus minus one
    #[test]
    fn test_values_stay_in_unit_interval() {
        for seed in [-3, 0, 1, 2, 42, i64::from(i32::MAX)] {
            let mut rng = ParkMiller::new(seed);
            for _ in 0..10_000 {
                let value = rng.next_unit();
                assert!((0.0..1.0).contains(&value), "seed {seed} produced {value}");
            }
        }
    }

    // Tests reproducibility across independently created streams
    // Verified by sharing state between instances
    #[test]
    fn test_same_seed_same_stream() {
        let mut first = ParkMiller::new(123_456);
        let mut second = ParkMiller::new(123_456);
        for _ in 0..1_000 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    // Tests the rand integration produces deterministic bytes
    // Verified by filling bytes from a thread rng
    #[test]
    fn test_fill_bytes_is_deterministic() {
        let mut first = [0_u8; 13];
        let mut second = [0_u8; 13];
        ParkMiller::new(9).fill_bytes(&mut first);
        ParkMiller::new(9).fill_bytes(&mut second);

        assert_eq!(first, second);
        assert!(first.iter().any(|&byte| byte != 0));
    }
}
