use proptest::prelude::*;
use std::collections::HashSet;
use yijing::pipeline::{
    coins_from_bytes, hexagram_from_bytes, hexagram_from_slice, hexagram_from_trigrams,
    line_from_coins, lines_from_bytes, trigram_from_lines, Coin, Line, Trigram,
};
use yijing::{hexagram_info, Reading, YijingError};

use Coin::{Heads as H, Tails as T};

#[test]
fn worked_example_decodes_stage_by_stage() {
    let block = [0b0001_0000, 0b1011_1001, 0b0100_0000];

    let coins = coins_from_bytes(&block);
    assert_eq!(
        coins,
        [[T, T, T], [H, T, T], [T, T, H], [T, H, H], [H, T, T], [H, T, H]]
    );

    let lines = coins.map(line_from_coins);
    assert_eq!(
        lines,
        [
            Line::OldYin,
            Line::YoungYang,
            Line::YoungYang,
            Line::YoungYin,
            Line::YoungYang,
            Line::YoungYin,
        ]
    );

    let (lower, upper) = lines_from_bytes(&block);
    assert_eq!(trigram_from_lines(lower), Trigram::Lake);
    assert_eq!(trigram_from_lines(upper), Trigram::Water);
    assert_eq!(hexagram_from_bytes(&block), 60);
}

#[test]
fn all_zero_and_all_one_blocks() {
    assert_eq!(hexagram_from_bytes(&[0, 0, 0]), 2);
    assert_eq!(hexagram_from_bytes(&[0xFF, 0xFF, 0xFF]), 1);

    let earth = Reading::cast(&[0, 0, 0]).unwrap();
    assert!(earth.lines.iter().all(|&l| l == Line::OldYin));
    assert_eq!((earth.lower, earth.upper), (Trigram::Earth, Trigram::Earth));

    let heaven = Reading::cast(&[0xFF, 0xFF, 0xC0]).unwrap();
    assert!(heaven.lines.iter().all(|&l| l == Line::OldYang));
    assert_eq!((heaven.lower, heaven.upper), (Trigram::Heaven, Trigram::Heaven));
}

#[test]
fn every_trigram_pair_reaches_a_distinct_hexagram() {
    let mut seen = HashSet::new();
    for lower in Trigram::ALL {
        for upper in Trigram::ALL {
            let n = hexagram_from_trigrams(lower, upper);
            assert!((1..=64).contains(&n));
            assert!(seen.insert(n), "hexagram {} reached twice", n);
            assert!(hexagram_info(n).is_ok());
        }
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn every_hexagram_is_reachable_from_some_block() {
    // 18 significant bits; the padding bits stay zero
    let mut seen = HashSet::new();
    for bits in 0u32..(1 << 18) {
        let word = bits << 6;
        let block = [(word >> 16) as u8, (word >> 8) as u8, word as u8];
        seen.insert(hexagram_from_bytes(&block));
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn malformed_block_sizes_are_rejected() {
    for len in [0usize, 1, 2, 4, 16] {
        let data = vec![0u8; len];
        match hexagram_from_slice(&data) {
            Err(YijingError::InvalidBlockSize(n)) => assert_eq!(n, len),
            other => panic!("expected InvalidBlockSize for {} bytes, got {:?}", len, other),
        }
    }
}

proptest! {
    #[test]
    fn hexagram_is_deterministic(block in any::<[u8; 3]>()) {
        prop_assert_eq!(hexagram_from_bytes(&block), hexagram_from_bytes(&block));
    }

    #[test]
    fn hexagram_is_in_range(block in any::<[u8; 3]>()) {
        let n = hexagram_from_bytes(&block);
        prop_assert!((1..=64).contains(&n));
    }

    #[test]
    fn padding_bits_never_matter(block in any::<[u8; 3]>(), padding in 0u8..64) {
        let mut padded = block;
        padded[2] = (block[2] & 0b1100_0000) | padding;
        prop_assert_eq!(hexagram_from_bytes(&block), hexagram_from_bytes(&padded));
    }

    #[test]
    fn slice_and_array_entry_points_agree(block in any::<[u8; 3]>()) {
        prop_assert_eq!(hexagram_from_slice(&block).unwrap(), hexagram_from_bytes(&block));
    }

    #[test]
    fn lines_are_yang_iff_odd(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let line = line_from_coins([Coin::from_bit(a), Coin::from_bit(b), Coin::from_bit(c)]);
        prop_assert_eq!(line.is_yang(), line.value() % 2 == 1);
        prop_assert_eq!(line.value(), 6 + a as u8 + b as u8 + c as u8);
    }
}
