use flotilla::{Board, Orientation, ShipSpec, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for spec in FLEET {
        let (r, c, o) = board.random_placement(&mut rng, spec.length()).unwrap();
        board.place_ship(spec, r, c, o).unwrap();
    }
    let attacks = rng.random_range(0..BOARD_SIZE);
    for _ in 0..attacks {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        let _ = board.receive_attack(r, c);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn failed_placement_leaves_board_unchanged(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        vertical in any::<bool>(),
    ) {
        let mut board = random_board(seed);
        let before = board.clone();
        let orientation = if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        match board.place_ship(ShipSpec::new("Probe", 4), row, col, orientation) {
            Ok(()) => prop_assert_eq!(board.ship_count(), before.ship_count() + 1),
            Err(_) => prop_assert_eq!(&board, &before),
        }
    }

    #[test]
    fn attack_resolves_exactly_once(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        let fresh = !board.attacked().contains(row, col);
        let first = board.receive_attack(row, col);
        prop_assert_eq!(first.is_some(), fresh);
        let after_first = board.clone();
        prop_assert!(board.receive_attack(row, col).is_none());
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn misses_never_outnumber_attacks(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert!(board.misses().len() <= board.attacked().count_ones());
        for &(r, c) in board.misses() {
            prop_assert!(board.attacked().contains(r, c));
        }
    }
}
