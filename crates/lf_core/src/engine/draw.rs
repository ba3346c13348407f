//! Draw generation and match counting
//!
//! All functions are pure - they take an RNG and config as input and return
//! plain values. This allows unit testing without a full `SelectionGame`.

use rand::Rng;

use crate::config::GameConfig;

/// Sample `max_selection` unique numbers from the pool, sorted ascending.
///
/// Rejection sampling: draw uniformly from the full pool range and retry on
/// duplicates. The pool is small relative to the sample, so retries stay
/// cheap and no shuffle of the whole pool is needed.
pub fn generate_numbers<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Vec<u8> {
    let take = config.max_selection as usize;
    let mut numbers: Vec<u8> = Vec::with_capacity(take);
    while numbers.len() < take {
        let candidate = rng.gen_range(1..=config.pool_size);
        if !numbers.contains(&candidate) {
            numbers.push(candidate);
        }
    }
    numbers.sort_unstable();
    numbers
}

/// Intersection of the player's picks and the drawn numbers, in draw order.
/// `drawn` is sorted, so the result is too.
pub fn matched_numbers(selection: &[u8], drawn: &[u8]) -> Vec<u8> {
    drawn.iter().copied().filter(|number| selection.contains(number)).collect()
}
