use rand::rngs::StdRng;
use rand::SeedableRng;
use wordstack_core::{
    parse_deck, CardNumbering, CardPlacement, GoToError, NavigationState, StackLayout,
    VISIBLE_DEPTH,
};

const TWO_CARD_DECK: &str = r#"[{"Group":"A","Words":["a1"]},{"Group":"B","Words":["b1"]}]"#;

fn loaded_state(json: &str) -> NavigationState {
    let deck = parse_deck(json).expect("deck parses");
    NavigationState::new(deck.len())
}

#[test]
fn exactly_one_active_card_for_every_index() {
    for deck_size in 1..12usize {
        let mut state = NavigationState::new(deck_size);
        for index in 0..deck_size {
            let layout = StackLayout::project(&state, CardNumbering::Legacy, 0.0);
            let active: Vec<usize> = layout
                .placements
                .iter()
                .enumerate()
                .filter(|(_, placement)| placement.is_active())
                .map(|(idx, _)| idx)
                .collect();
            assert_eq!(active, vec![index]);

            for (entry, placement) in layout.placements.iter().enumerate() {
                let expect_visible = entry >= index && entry - index < VISIBLE_DEPTH;
                assert_eq!(placement.is_visible(), expect_visible, "entry {entry} at {index}");
                if !expect_visible {
                    assert_eq!(*placement, CardPlacement::Hidden);
                }
            }
            state = state.next();
        }
    }
}

#[test]
fn load_then_next_shows_zero_based_counter() {
    let state = loaded_state(TWO_CARD_DECK);
    assert_eq!(state.current_index(), 0);
    let state = state.next();
    assert_eq!(state.current_index(), 1);
    let layout = StackLayout::project(&state, CardNumbering::Legacy, 0.0);
    assert_eq!((layout.current_label, layout.total), (1, 2));
    assert!(layout.arrows.next_disabled);
    assert!(!layout.arrows.prev_disabled);
}

#[test]
fn go_to_card_keeps_legacy_offset() {
    let state = loaded_state(TWO_CARD_DECK);
    let moved = state.go_to_card(1, CardNumbering::Legacy).expect("valid number");
    assert_eq!(moved.current_index(), 1);

    for number in [0, 3] {
        assert_eq!(
            state.go_to_card(number, CardNumbering::Legacy),
            Err(GoToError::OutOfRange { max: 2 })
        );
    }
    assert_eq!(state.current_index(), 0);
}

#[test]
fn drag_release_commits_past_threshold() {
    let state = NavigationState::new(3);
    assert_eq!(state.release_drag(-150.0).current_index(), 1);
    assert_eq!(state.release_drag(-50.0).current_index(), 0);
    assert_eq!(state.next().release_drag(150.0).current_index(), 0);
}

#[test]
fn random_covers_whole_deck() {
    let mut rng = StdRng::seed_from_u64(2024);
    let state = NavigationState::new(4);
    let mut seen = [false; 4];
    for _ in 0..500 {
        let index = state.random(&mut rng).current_index();
        assert!(index < 4);
        seen[index] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}
