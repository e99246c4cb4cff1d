//! Date generators.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Generate a date between `min_days` and `max_days` (inclusive) before `today`.
pub fn generate_days_ago<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    min_days: i64,
    max_days: i64,
) -> NaiveDate {
    let days = rng.random_range(min_days..=max_days);
    today - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_days_ago() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

        for _ in 0..100 {
            let date = generate_days_ago(&mut rng, today, 100, 1500);
            let age = (today - date).num_days();
            assert!((100..=1500).contains(&age));
            assert!(date < today);
        }
    }
}
