use crate::domain::model::{PlayedSets, Pool, MAX_NUMBER, MIN_NUMBER};
use std::collections::BTreeSet;

/// Numbers in 1..=45 that no played set contains, ascending.
pub fn unplayed_pool(played: &PlayedSets) -> Pool {
    let excluded: BTreeSet<_> = played.numbers().collect();
    let numbers = (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !excluded.contains(n))
        .collect();
    Pool::from_sorted(numbers)
}
