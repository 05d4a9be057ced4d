//! Unit tests for the generators module.
//!
//! This module contains tests verifying:
//! - Recurrence correctness from the initial state
//! - Reset reproducibility for every generator
//! - Cycle structure of the congruential generators
//! - Runtime selection through `GeneratorKind`
//! - Range and determinism properties via property-based testing

use super::*;
use crate::error::GeneratorError;
use proptest::prelude::*;

/// Draws `count` values after a reset.
fn draw(generator: &mut dyn Generator, count: usize) -> Vec<u64> {
    generator.reset();
    (0..count).map(|_| generator.produce_next()).collect()
}

/// Steps until the first output recurs; equals the period for generators
/// whose output is their whole state.
fn recurrence_length(generator: &mut dyn Generator, limit: usize) -> Option<usize> {
    generator.reset();
    let start = generator.produce_next();
    (1..=limit).find(|_| generator.produce_next() == start)
}

#[test]
fn test_module_structure() {
    fn accepts_generator<G: Generator + ?Sized>(_: &G) {}

    accepts_generator(&PowerOfTwoGenerator::new());
    accepts_generator(&PrimeGenerator::new());
    accepts_generator(&ShuffledGenerator::new(
        PowerOfTwoGenerator::new(),
        PrimeGenerator::new(),
    ));
    accepts_generator(GeneratorKind::Prime.build().as_ref());
}

#[test]
fn test_power_of_two_recurrence() {
    let mut rng = PowerOfTwoGenerator::new();
    let values = draw(&mut rng, 3);
    assert_eq!(values, vec![66, 159, 40]);

    let mut state = 1u64;
    for value in draw(&mut rng, 500) {
        state = (state * 29 + 37) % 256;
        assert_eq!(value, state);
    }
}

#[test]
fn test_prime_recurrence() {
    let mut rng = PrimeGenerator::new();
    let values = draw(&mut rng, 2);
    assert_eq!(values, vec![5, 25]);

    let mut state = 1u64;
    for value in draw(&mut rng, 500) {
        state = (state * 5) % 263;
        assert_eq!(value, state);
    }
}

#[test]
fn test_reset_replays_sequence() {
    for kind in GeneratorKind::ALL {
        let mut rng = kind.build();
        let first_run = draw(rng.as_mut(), 1000);
        let second_run = draw(rng.as_mut(), 1000);
        assert_eq!(first_run, second_run, "{} did not replay", kind);
    }
}

#[test]
fn test_reset_mid_stream() {
    let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), PrimeGenerator::new());
    let fresh: Vec<u64> = (0..50).map(|_| rng.produce_next()).collect();

    for _ in 0..123 {
        rng.produce_next();
    }
    rng.reset();
    let replayed: Vec<u64> = (0..50).map(|_| rng.produce_next()).collect();
    assert_eq!(fresh, replayed);
}

#[test]
fn test_power_of_two_full_period() {
    let mut rng = PowerOfTwoGenerator::new();
    assert_eq!(recurrence_length(&mut rng, 1000), Some(256));

    let mut seen = draw(&mut rng, 256);
    seen.sort_unstable();
    let all: Vec<u64> = (0..256).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_prime_period_excludes_zero() {
    let mut rng = PrimeGenerator::new();
    assert_eq!(recurrence_length(&mut rng, 1000), Some(262));

    let mut seen = draw(&mut rng, 262);
    assert!(!seen.contains(&0));
    seen.sort_unstable();
    let non_zero: Vec<u64> = (1..263).collect();
    assert_eq!(seen, non_zero);
}

#[test]
fn test_fill_matches_produce_next() {
    let mut rng = PrimeGenerator::new();
    let mut buffer = [0u64; 16];
    rng.fill(&mut buffer);

    let expected = draw(&mut rng, 16);
    assert_eq!(buffer.to_vec(), expected);
}

#[test]
fn test_fill_empty_buffer() {
    let mut rng = PowerOfTwoGenerator::new();
    let mut empty: [u64; 0] = [];
    rng.fill(&mut empty);
    assert_eq!(rng.produce_next(), 66);
}

#[test]
fn test_try_fill_matches_fill() {
    let mut rng = GeneratorKind::Shuffled.build();
    let mut expected = [0u64; 64];
    rng.fill(&mut expected);

    rng.reset();
    let mut buffer = [0u64; 64];
    assert_eq!(rng.try_fill(&mut buffer), Ok(()));
    assert_eq!(buffer, expected);
}

#[test]
fn test_try_fill_stops_at_first_error() {
    /// Selects slot 50 once, then a slot past the buffer.
    struct Failing {
        calls: u64,
    }

    impl Generator for Failing {
        fn produce_next(&mut self) -> u64 {
            self.calls += 1;
            if self.calls <= 1 {
                5
            } else {
                10
            }
        }

        fn modulus(&self) -> u64 {
            10
        }

        fn reset(&mut self) {
            self.calls = 0;
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), Failing { calls: 0 });
    let slot_fifty = rng.buffer()[50];
    let mut buffer = [7u64; 3];

    assert_eq!(
        rng.try_fill(&mut buffer),
        Err(GeneratorError::BufferIndexOutOfRange {
            index: 100,
            len: 100
        })
    );
    assert_eq!(buffer, [slot_fifty, 7, 7]);
}

#[test]
fn test_borrowed_generator_shares_state() {
    fn advance<G: Generator>(mut generator: G) -> (u64, u64) {
        (generator.produce_next(), generator.modulus())
    }

    let mut rng = PowerOfTwoGenerator::new();
    assert_eq!(advance(&mut rng), (66, 256));
    assert_eq!(rng.produce_next(), 159);
}

#[test]
fn test_generator_kind_parsing() {
    assert_eq!(
        "power-of-two".parse::<GeneratorKind>(),
        Ok(GeneratorKind::PowerOfTwo)
    );
    assert_eq!("PRIME".parse::<GeneratorKind>(), Ok(GeneratorKind::Prime));
    assert_eq!(
        "maclaren".parse::<GeneratorKind>(),
        Ok(GeneratorKind::Shuffled)
    );
    assert!("mersenne".parse::<GeneratorKind>().is_err());

    for kind in GeneratorKind::ALL {
        assert_eq!(kind.to_string().parse::<GeneratorKind>(), Ok(kind));
    }
}

#[test]
fn test_generator_kind_build() {
    let built: Vec<(String, u64)> = GeneratorKind::ALL
        .iter()
        .map(|kind| {
            let rng = kind.build();
            (rng.name().to_string(), rng.modulus())
        })
        .collect();

    assert_eq!(
        built,
        vec![
            ("power-of-two".to_string(), 256),
            ("prime".to_string(), 263),
            ("shuffled".to_string(), 256),
        ]
    );
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every value stays below the reported modulus.
    #[test]
    fn prop_values_below_modulus(kind_index in 0..3usize, count in 1..2000usize) {
        let kind = GeneratorKind::ALL[kind_index];
        let mut rng = kind.build();
        let modulus = rng.modulus();

        for (i, value) in draw(rng.as_mut(), count).into_iter().enumerate() {
            prop_assert!(
                value < modulus,
                "{} value at index {} is out of range: {} (modulus={})",
                kind, i, value, modulus
            );
        }
    }

    /// Reset followed by `k` draws always yields the same prefix.
    #[test]
    fn prop_reset_determinism(kind_index in 0..3usize, warmup in 0..500usize, k in 1..500usize) {
        let kind = GeneratorKind::ALL[kind_index];
        let mut rng = kind.build();
        let reference = draw(rng.as_mut(), k);

        for _ in 0..warmup {
            rng.produce_next();
        }
        prop_assert_eq!(reference, draw(rng.as_mut(), k));
    }

    /// Custom power-of-two parameters keep the state invariant.
    #[test]
    fn prop_custom_power_of_two_in_range(
        multiplier in 1..10_000u64,
        increment in 0..10_000u64,
        exponent in 1..32u32,
    ) {
        let modulus = 1u64 << exponent;
        let mut rng = PowerOfTwoGenerator::with_params(multiplier, increment, modulus).unwrap();
        for _ in 0..256 {
            prop_assert!(rng.produce_next() < modulus);
        }
    }
}
