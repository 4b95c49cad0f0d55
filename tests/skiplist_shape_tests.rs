// Skip List — tower shape tests.
// Scripted heights pin down exactly which levels each key lands on.

use skiplist_kv::{CoinFlip, FixedHeights, Options, SkipList};

fn scripted(heights: &[usize]) -> SkipList<i32, &'static str, FixedHeights> {
    SkipList::with_generator(FixedHeights::new(heights.iter().copied()))
}

// =============================================================================
// Test 1: Exact level layout
// =============================================================================
// Heights 14:0 23:2 34:1 42:3 50:0 give
//
//   Level 3: 42
//   Level 2: 23 42
//   Level 1: 23 34 42
//   Level 0: 14 23 34 42 50
#[test]
fn levels_follow_scripted_heights() {
    let mut sl = scripted(&[0, 2, 1, 3, 0]);
    for k in [14, 23, 34, 42, 50] {
        sl.insert(k, "");
    }

    assert_eq!(sl.top_level(), 3);
    assert_eq!(
        sl.levels(),
        vec![
            vec![&14, &23, &34, &42, &50],
            vec![&23, &34, &42],
            vec![&23, &42],
            vec![&42],
        ]
    );
    assert_eq!(sl.level_lens(), vec![5, 3, 2, 1]);
    assert_eq!(sl.tower_height(&23), Some(2));
    assert_eq!(sl.tower_height(&99), None);
}

#[test]
fn insertion_order_does_not_matter_for_layout() {
    let mut sl = scripted(&[3, 0, 1, 0, 2]);
    for k in [42, 50, 34, 14, 23] {
        sl.insert(k, "");
    }
    assert_eq!(
        sl.levels(),
        vec![
            vec![&14, &23, &34, &42, &50],
            vec![&23, &34, &42],
            vec![&23, &42],
            vec![&42],
        ]
    );
}

// =============================================================================
// Test 2: Delete unlinks the whole tower and lowers the top level
// =============================================================================
#[test]
fn delete_tallest_tower_lowers_top_level() {
    let mut sl = scripted(&[0, 2, 1, 3, 0]);
    for k in [14, 23, 34, 42, 50] {
        sl.insert(k, "");
    }

    sl.delete(&42);
    assert_eq!(sl.top_level(), 2);
    assert_eq!(
        sl.levels(),
        vec![vec![&14, &23, &34, &50], vec![&23, &34], vec![&23]]
    );

    sl.delete(&23);
    assert_eq!(sl.top_level(), 1);
    assert_eq!(sl.levels(), vec![vec![&14, &34, &50], vec![&34]]);

    sl.delete(&34);
    assert_eq!(sl.top_level(), 0);
    assert_eq!(sl.levels(), vec![vec![&14, &50]]);
}

#[test]
fn delete_short_tower_keeps_top_level() {
    let mut sl = scripted(&[4, 0, 1]);
    for k in [1, 2, 3] {
        sl.insert(k, "");
    }
    sl.delete(&3);
    sl.delete(&2);
    assert_eq!(sl.top_level(), 4);
    assert_eq!(sl.level_lens(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn delete_everything_returns_to_empty_shape() {
    let mut sl = scripted(&[5, 2, 7]);
    for k in [1, 2, 3] {
        sl.insert(k, "");
    }
    for k in [2, 3, 1] {
        sl.delete(&k);
    }
    assert!(sl.is_empty());
    assert_eq!(sl.top_level(), 0);
    assert_eq!(sl.levels(), vec![Vec::<&i32>::new()]);
}

// =============================================================================
// Test 3: Overwrite never reshapes
// =============================================================================
#[test]
fn overwrite_does_not_draw_a_new_height() {
    let mut sl = scripted(&[1, 6]);
    sl.insert(5, "a");
    sl.insert(5, "b");
    assert_eq!(sl.tower_height(&5), Some(1));
    assert_eq!(sl.top_level(), 1);

    // the unused 6 goes to the next new key
    sl.insert(6, "c");
    assert_eq!(sl.tower_height(&6), Some(6));
}

// =============================================================================
// Test 4: Height ceiling
// =============================================================================
// Before any insert the ceiling is 8; afterwards it is max(10, log2(len)).
#[test]
fn heights_are_capped_at_the_ceiling() {
    let mut sl = scripted(&[100, 100]);
    assert_eq!(sl.max_level(), 8);

    sl.insert(1, "");
    assert_eq!(sl.tower_height(&1), Some(8));
    assert_eq!(sl.max_level(), 10);

    sl.insert(2, "");
    assert_eq!(sl.tower_height(&2), Some(10));
    assert!(sl.top_level() <= sl.max_level());
}

#[test]
fn ceiling_follows_log2_of_len() {
    let mut sl = scripted(&[]);
    for k in 0..4096 {
        sl.insert(k, "");
    }
    assert_eq!(sl.max_level(), 12);

    // shrinking the list leaves the ceiling alone
    for k in 0..4000 {
        sl.delete(&k);
    }
    assert_eq!(sl.max_level(), 12);
}

#[test]
fn custom_options_change_the_ceiling() {
    let opts = Options::new()
        .with_initial_max_level(2)
        .with_min_max_level(3)
        .with_max_level_limit(4);
    let mut sl = SkipList::with_options(opts, FixedHeights::new([9, 9, 9])).unwrap();

    sl.insert(1, ());
    assert_eq!(sl.tower_height(&1), Some(2));
    assert_eq!(sl.max_level(), 3);

    sl.insert(2, ());
    assert_eq!(sl.tower_height(&2), Some(3));

    for k in 3..100 {
        sl.insert(k, ());
    }
    // log2(99) = 6, but the hard limit wins
    assert_eq!(sl.max_level(), 4);
}

#[test]
fn invalid_options_are_rejected() {
    let opts = Options::new().with_max_level_limit(5);
    let result: skiplist_kv::Result<SkipList<i32, ()>> =
        SkipList::with_options(opts, CoinFlip::seeded(1));
    assert!(matches!(result, Err(skiplist_kv::Error::InvalidOptions(_))));
}

// =============================================================================
// Test 5: Tower monotonicity under random heights
// =============================================================================
#[test]
fn every_level_is_a_sorted_subset_of_the_one_below() {
    let mut sl = SkipList::with_generator(CoinFlip::seeded(2024));
    for i in 0..2000u32 {
        sl.insert(i.wrapping_mul(2_654_435_761) % 10_007, i);
    }
    for i in 0..500u32 {
        sl.delete(&(i * 7));
    }

    let levels = sl.levels();
    assert_eq!(levels[0].len(), sl.len());
    for level in &levels {
        assert!(level.windows(2).all(|w| w[0] < w[1]));
    }
    for pair in levels.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        assert!(upper.iter().all(|k| lower.binary_search(k).is_ok()));
    }
    for (level, keys) in levels.iter().enumerate() {
        for key in keys {
            assert!(sl.tower_height(*key).unwrap() >= level);
        }
    }
}
