//! Numeric value generators.

use rand::Rng;
use seed_core::CountRange;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Generate a count inside a configured range (inclusive).
pub fn generate_count<R: Rng>(rng: &mut R, range: CountRange) -> u32 {
    rng.random_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 2010, 2025);
            assert!((2010..=2025).contains(&value));
        }
    }

    #[test]
    fn test_generate_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = CountRange::new(3, 7);

        for _ in 0..100 {
            assert!(range.contains(generate_count(&mut rng, range)));
        }

        assert_eq!(generate_count(&mut rng, CountRange::fixed(2)), 2);
    }
}
