//! Tests for dealing decks from icon pools.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use strictly_memory::{Deck, DeckError, GridSize, Icon, build_deck, fisher_yates};

fn pool(names: &[&str]) -> Vec<Icon> {
    names.iter().copied().map(Icon::from).collect()
}

fn counts(icons: &[Icon]) -> HashMap<&Icon, usize> {
    let mut counts = HashMap::new();
    for icon in icons {
        *counts.entry(icon).or_insert(0) += 1;
    }
    counts
}

fn letters(n: usize) -> Vec<Icon> {
    (0..n).map(|i| Icon::new(format!("icon-{i}"))).collect()
}

#[test]
fn test_deck_length_is_four_times_grid_size() {
    let mut rng = StdRng::seed_from_u64(11);
    let icons = letters(40);
    for size in 1..=10 {
        let deck = build_deck(&icons, GridSize::new(size).unwrap(), &mut rng).unwrap();
        assert_eq!(deck.len(), size * 4);
        assert_eq!(deck.pair_count(), size * 2);
    }
}

#[test]
fn test_every_dealt_icon_appears_exactly_twice() {
    let mut rng = StdRng::seed_from_u64(5);
    let deck = build_deck(&letters(20), GridSize::new(4).unwrap(), &mut rng).unwrap();

    let counts = counts(deck.icons());
    assert_eq!(counts.len(), 8);
    assert!(counts.values().all(|&count| count == 2));
}

#[test]
fn test_second_half_is_permutation_of_first() {
    let mut rng = StdRng::seed_from_u64(23);
    let deck = build_deck(&letters(12), GridSize::new(3).unwrap(), &mut rng).unwrap();

    let (first, second) = deck.icons().split_at(6);
    let mut first = first.to_vec();
    let mut second = second.to_vec();
    first.sort();
    second.sort();
    assert_eq!(first, second);
}

#[test]
fn test_dealt_icons_come_from_pool() {
    let mut rng = StdRng::seed_from_u64(2);
    let icons = pool(&["❄️", "⛄", "🧤", "🎿", "🧣", "🏂", "🦌", "🎄", "🌨️"]);
    let deck = build_deck(&icons, GridSize::new(2).unwrap(), &mut rng).unwrap();
    assert!(deck.icons().iter().all(|icon| icons.contains(icon)));
}

#[test]
fn test_same_seed_deals_same_deck() {
    let icons = letters(30);
    let size = GridSize::default();
    let a = build_deck(&icons, size, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = build_deck(&icons, size, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_pool_duplicates_are_collapsed() {
    let mut rng = StdRng::seed_from_u64(8);
    let icons = pool(&["A", "A", "B", "B", "C", "D"]);
    let deck = build_deck(&icons, GridSize::new(2).unwrap(), &mut rng).unwrap();

    let counts = counts(deck.icons());
    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|&count| count == 2));
}

#[test]
fn test_small_pool_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let icons = pool(&["A", "B", "B", "C"]);
    let result = build_deck(&icons, GridSize::new(2).unwrap(), &mut rng);
    assert_eq!(
        result,
        Err(DeckError::InsufficientIcons {
            required: 4,
            available: 3
        })
    );
}

#[test]
fn test_fisher_yates_preserves_multiset() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut icons = pool(&["A", "A", "B", "C", "C", "C", "D"]);
    let mut before = icons.clone();
    fisher_yates(&mut icons, &mut rng);

    let mut after = icons;
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_explicit_deck_requires_pairs() {
    assert!(Deck::from_icons(pool(&["A", "A", "B", "B"])).is_ok());
    assert_eq!(Deck::from_icons(Vec::new()), Err(DeckError::Empty));
    assert_eq!(
        Deck::from_icons(pool(&["A", "B", "A"])),
        Err(DeckError::Unpaired {
            icon: Icon::from("B"),
            count: 1
        })
    );
    assert_eq!(
        Deck::from_icons(pool(&["A", "A", "A", "A"])),
        Err(DeckError::Unpaired {
            icon: Icon::from("A"),
            count: 4
        })
    );
}

#[test]
fn test_deck_json_round_trip_validates() {
    let deck: Deck = serde_json::from_str(r#"["x","y","y","x"]"#).unwrap();
    assert_eq!(deck.len(), 4);
    assert!(serde_json::from_str::<Deck>(r#"["x","y"]"#).is_err());
}
