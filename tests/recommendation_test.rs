use lotto_qr::core::strategy::{group_shuffle, ordered};
use lotto_qr::{parse_payload, recommend, unplayed_pool, PlayedSets, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_pool_and_played_numbers_cover_one_to_forty_five() {
    let played = parse_payload(
        "https://m.dhlottery.co.kr/?v=1100a030711233544b010203040506c404142434445",
    )
    .unwrap()
    .unwrap();
    let pool = unplayed_pool(&played);

    let played_numbers: HashSet<u8> = played.numbers().collect();
    assert_eq!(pool.len() + played_numbers.len(), 45);
    assert!(pool.as_slice().windows(2).all(|w| w[0] < w[1]));
    assert!(played_numbers.iter().all(|&n| !pool.contains(n)));
}

#[test]
fn test_every_strategy_respects_count_and_pool() {
    let played = PlayedSets::new(vec![vec![2, 4, 6, 8, 10, 12], vec![1, 3, 5, 7, 9, 11]]);
    let pool = unplayed_pool(&played);

    for (seed, strategy) in [Strategy::Ordered, Strategy::GroupShuffle, Strategy::Shuffle]
        .into_iter()
        .enumerate()
    {
        let sets = recommend(&pool, 5, strategy, &mut rng(seed as u64));
        assert_eq!(sets.len(), 5, "{strategy}");

        for set in &sets {
            assert_eq!(set.len(), 6, "{strategy}");
            assert!(set.iter().all(|&n| pool.contains(n)), "{strategy}");
            let unique: HashSet<_> = set.iter().collect();
            assert_eq!(unique.len(), 6, "{strategy}");
        }
    }
}

#[test]
fn test_ordered_pads_leftover_with_leading_numbers() {
    // 1..7 只夠一組，第二組用開頭的號碼補
    let sets = ordered(&[1, 2, 3, 4, 5, 6, 7], 2, &mut rng(0));
    assert_eq!(sets, vec![vec![1, 2, 3, 4, 5, 6], vec![7, 1]]);
}

#[test]
fn test_large_request_on_small_pool_is_filled() {
    let played = PlayedSets::new(
        (1..=39u8)
            .collect::<Vec<_>>()
            .chunks(6)
            .map(|c| c.to_vec())
            .collect(),
    );
    let pool = unplayed_pool(&played);
    assert_eq!(pool.as_slice(), &[40, 41, 42, 43, 44, 45]);

    let sets = recommend(&pool, 4, Strategy::Ordered, &mut rng(4));
    assert_eq!(sets.len(), 4);
    for set in &sets {
        assert_eq!(set, &vec![40, 41, 42, 43, 44, 45]);
    }
}

#[test]
fn test_group_shuffle_uses_each_number_once_on_exact_fit() {
    let numbers: Vec<u8> = (1..=36).collect();
    let sets = group_shuffle(&numbers, 6, &mut rng(0));

    let mut flat: Vec<u8> = sets.into_iter().flatten().collect();
    flat.sort_unstable();
    assert_eq!(flat, numbers);
}

#[test]
fn test_shuffle_with_same_seed_is_reproducible() {
    let pool = unplayed_pool(&PlayedSets::default());
    let first = recommend(&pool, 10, Strategy::Shuffle, &mut rng(99));
    let second = recommend(&pool, 10, Strategy::Shuffle, &mut rng(99));
    assert_eq!(first, second);
}
