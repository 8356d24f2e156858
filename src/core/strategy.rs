use crate::domain::model::{Number, NumberSet, Pool, Strategy, SET_SIZE};
use rand::Rng;

/// 預先配置的上限，避免呼叫端傳入極大的組數
const CAPACITY_HINT: usize = 64;

/// Builds `set_count` recommended sets from `pool` with the chosen strategy.
///
/// Sets come back in generation order; the ordered paths do not sort them.
pub fn recommend<R: Rng + ?Sized>(
    pool: &Pool,
    set_count: usize,
    strategy: Strategy,
    rng: &mut R,
) -> Vec<NumberSet> {
    tracing::debug!(
        "Generating {} sets from {} numbers with {}",
        set_count,
        pool.len(),
        strategy
    );

    match strategy {
        Strategy::Ordered => ordered(pool.as_slice(), set_count, rng),
        Strategy::GroupShuffle => group_shuffle(pool.as_slice(), set_count, rng),
        Strategy::Shuffle => {
            let mut sets = Vec::with_capacity(set_count.min(CAPACITY_HINT));
            fill_with_samples(pool.as_slice(), &mut sets, set_count, rng);
            sets
        }
    }
}

/// Slices `numbers` into consecutive sets of six.
///
/// When there are not enough numbers, the leftover tail is padded with the
/// same count of numbers from the front (so a number can repeat), and any
/// sets still missing are random samples of `numbers`.
pub fn ordered<R: Rng + ?Sized>(
    numbers: &[Number],
    set_count: usize,
    rng: &mut R,
) -> Vec<NumberSet> {
    let required = set_count.saturating_mul(SET_SIZE);

    if numbers.len() >= required {
        return numbers
            .chunks_exact(SET_SIZE)
            .take(set_count)
            .map(<[Number]>::to_vec)
            .collect();
    }

    let full_sets = numbers.len() / SET_SIZE;
    let leftover = numbers.len() % SET_SIZE;

    let mut sets: Vec<NumberSet> = Vec::with_capacity(set_count.min(CAPACITY_HINT));
    sets.extend(numbers.chunks_exact(SET_SIZE).map(<[Number]>::to_vec));

    if leftover > 0 {
        let mut wrapped = numbers[full_sets * SET_SIZE..].to_vec();
        wrapped.extend_from_slice(&numbers[..leftover]);
        sets.push(wrapped);
    }

    tracing::debug!(
        "Only {} numbers for {} sets, filling {} with random samples",
        numbers.len(),
        set_count,
        set_count - sets.len()
    );
    fill_with_samples(numbers, &mut sets, set_count, rng);
    sets
}

/// Interleaves the six-number groups of `numbers` and slices the result
/// like [`ordered`].
pub fn group_shuffle<R: Rng + ?Sized>(
    numbers: &[Number],
    set_count: usize,
    rng: &mut R,
) -> Vec<NumberSet> {
    let interleaved = interleave_groups(numbers);
    ordered(&interleaved, set_count, rng)
}

/// Reads the six-number groups of `numbers` column by column.
///
/// `[1..=6, 7..=12, 13, 14]` becomes `[1, 7, 13, 2, 8, 14, 3, 9, 4, 10, ...]`.
pub fn interleave_groups(numbers: &[Number]) -> Vec<Number> {
    let groups: Vec<&[Number]> = numbers.chunks(SET_SIZE).collect();
    let mut interleaved = Vec::with_capacity(numbers.len());

    // 較短的最後一組在沒有元素的欄位直接跳過
    for column in 0..SET_SIZE {
        interleaved.extend(groups.iter().filter_map(|group| group.get(column).copied()));
    }
    interleaved
}

/// Fisher–Yates: for i from n-1 down to 1, swap i with a uniform j in 0..=i.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Up to six distinct numbers drawn from `numbers`, ascending.
pub fn random_sample<R: Rng + ?Sized>(numbers: &[Number], rng: &mut R) -> NumberSet {
    let mut shuffled = numbers.to_vec();
    fisher_yates(&mut shuffled, rng);
    shuffled.truncate(SET_SIZE);
    shuffled.sort_unstable();
    shuffled
}

fn fill_with_samples<R: Rng + ?Sized>(
    numbers: &[Number],
    sets: &mut Vec<NumberSet>,
    set_count: usize,
    rng: &mut R,
) {
    for _ in sets.len()..set_count {
        sets.push(random_sample(numbers, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pool::unplayed_pool;
    use crate::domain::model::PlayedSets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn full_pool() -> Pool {
        unplayed_pool(&PlayedSets::default())
    }

    fn range(lo: u8, hi: u8) -> Vec<u8> {
        (lo..=hi).collect()
    }

    #[test]
    fn test_ordered_full_pool_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let sets = recommend(&full_pool(), 5, Strategy::Ordered, &mut rng);

        assert_eq!(
            sets,
            vec![
                range(1, 6),
                range(7, 12),
                range(13, 18),
                range(19, 24),
                range(25, 30),
            ]
        );
    }

    #[test]
    fn test_ordered_wraparound_reuses_leading_numbers() {
        let mut rng = StdRng::seed_from_u64(1);
        let sets = ordered(&range(1, 7), 2, &mut rng);

        assert_eq!(sets, vec![range(1, 6), vec![7, 1]]);
    }

    #[test]
    fn test_ordered_wraparound_then_random_fill() {
        let numbers = range(1, 8);
        let mut rng = StdRng::seed_from_u64(3);
        let sets = ordered(&numbers, 4, &mut rng);

        assert_eq!(sets.len(), 4);
        assert_eq!(sets[0], range(1, 6));
        assert_eq!(sets[1], vec![7, 8, 1, 2]);
        for set in &sets[2..] {
            assert_eq!(set.len(), SET_SIZE);
            assert!(set.iter().all(|n| numbers.contains(n)));
            assert!(set.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_ordered_without_leftover_skips_wraparound_set() {
        let numbers = range(1, 12);
        let mut rng = StdRng::seed_from_u64(9);
        let sets = ordered(&numbers, 3, &mut rng);

        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0], range(1, 6));
        assert_eq!(sets[1], range(7, 12));
        assert_eq!(sets[2].len(), SET_SIZE);
    }

    #[test]
    fn test_ordered_exact_fit_uses_every_number_once() {
        let numbers = range(10, 27);
        let mut rng = StdRng::seed_from_u64(0);
        let sets = ordered(&numbers, 3, &mut rng);

        let flat: Vec<u8> = sets.concat();
        assert_eq!(flat, numbers);
    }

    #[test]
    fn test_zero_sets_for_every_strategy() {
        let mut rng = StdRng::seed_from_u64(5);
        for strategy in [Strategy::Ordered, Strategy::GroupShuffle, Strategy::Shuffle] {
            assert!(recommend(&full_pool(), 0, strategy, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_shuffle_sets_are_distinct_subsets_of_pool() {
        let played = PlayedSets::new(vec![range(1, 6), range(20, 25)]);
        let pool = unplayed_pool(&played);
        let mut rng = StdRng::seed_from_u64(42);

        let sets = recommend(&pool, 8, Strategy::Shuffle, &mut rng);

        assert_eq!(sets.len(), 8);
        for set in &sets {
            assert_eq!(set.len(), SET_SIZE);
            assert!(set.iter().all(|&n| pool.contains(n)));
            let unique: HashSet<_> = set.iter().collect();
            assert_eq!(unique.len(), SET_SIZE);
        }
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let pool = full_pool();
        let first = recommend(&pool, 5, Strategy::Shuffle, &mut StdRng::seed_from_u64(2024));
        let second = recommend(&pool, 5, Strategy::Shuffle, &mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_on_small_pool_never_invents_numbers() {
        let numbers = vec![3, 17, 44];
        let mut rng = StdRng::seed_from_u64(8);
        let set = random_sample(&numbers, &mut rng);
        assert_eq!(set, vec![3, 17, 44]);

        assert_eq!(random_sample(&[], &mut rng), Vec::<u8>::new());
    }

    #[test]
    fn test_interleave_groups_column_wise() {
        let interleaved = interleave_groups(&range(1, 14));
        assert_eq!(
            interleaved,
            vec![1, 7, 13, 2, 8, 14, 3, 9, 4, 10, 5, 11, 6, 12]
        );
        assert!(interleave_groups(&[]).is_empty());
    }

    #[test]
    fn test_group_shuffle_is_bijection_on_exact_fit() {
        let numbers = range(1, 24);
        let mut rng = StdRng::seed_from_u64(11);
        let sets = group_shuffle(&numbers, 4, &mut rng);

        assert_eq!(sets.len(), 4);
        assert_eq!(sets[0], vec![1, 7, 13, 19, 2, 8]);

        let mut flat: Vec<u8> = sets.concat();
        flat.sort_unstable();
        assert_eq!(flat, numbers);
    }

    #[test]
    fn test_group_shuffle_full_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let sets = recommend(&full_pool(), 2, Strategy::GroupShuffle, &mut rng);

        assert_eq!(sets[0], vec![1, 7, 13, 19, 25, 31]);
        assert_eq!(sets[1], vec![37, 43, 2, 8, 14, 20]);
    }

    #[test]
    fn test_ordered_short_pool_repeats_inside_wrapped_set() {
        // 不足六個號碼時，補齊的那組會重複同樣的號碼
        let mut rng = StdRng::seed_from_u64(6);
        let sets = ordered(&[1, 2, 3], 2, &mut rng);

        assert_eq!(sets, vec![vec![1, 2, 3, 1, 2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn test_short_pool_samples_hold_whole_pool() {
        let played = PlayedSets::new(
            range(1, 41)
                .chunks(SET_SIZE)
                .map(<[u8]>::to_vec)
                .collect(),
        );
        let pool = unplayed_pool(&played);
        assert_eq!(pool.as_slice(), &[42, 43, 44, 45]);

        let mut rng = StdRng::seed_from_u64(12);
        let sets = recommend(&pool, 3, Strategy::Shuffle, &mut rng);
        assert_eq!(sets, vec![vec![42, 43, 44, 45]; 3]);
    }

    #[test]
    fn test_empty_pool_yields_empty_sets() {
        let mut rng = StdRng::seed_from_u64(13);

        assert_eq!(ordered(&[], 2, &mut rng), vec![Vec::<u8>::new(), Vec::new()]);
        assert_eq!(group_shuffle(&[], 2, &mut rng), vec![Vec::<u8>::new(), Vec::new()]);
        assert_eq!(
            recommend(&Pool::from_sorted(Vec::new()), 2, Strategy::Shuffle, &mut rng),
            vec![Vec::<u8>::new(), Vec::new()]
        );
    }

    #[test]
    fn test_count_beyond_capacity_hint() {
        let mut rng = StdRng::seed_from_u64(21);
        let sets = recommend(&full_pool(), 10_000, Strategy::Shuffle, &mut rng);

        assert_eq!(sets.len(), 10_000);
        assert!(sets.iter().all(|set| set.len() == SET_SIZE));
    }

    #[test]
    fn test_fisher_yates_is_a_permutation() {
        let mut items = range(1, 45);
        fisher_yates(&mut items, &mut StdRng::seed_from_u64(77));
        items.sort_unstable();
        assert_eq!(items, range(1, 45));
    }
}
