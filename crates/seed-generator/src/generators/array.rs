//! Selection from pools of values.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one element uniformly, `None` for an empty pool.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, pool: &[T]) -> Option<T> {
    pool.choose(rng).copied()
}

/// Pick up to `amount` distinct elements (by position) from the pool.
///
/// The result is shorter than `amount` only when the pool is.
pub fn sample_distinct<R: Rng, T: Clone>(rng: &mut R, pool: &[T], amount: usize) -> Vec<T> {
    pool.choose_multiple(rng, amount).cloned().collect()
}
