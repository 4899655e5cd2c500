use flotilla::{Board, BoardError, Orientation, ShipSpec, ShotResult, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn placement_bounds_and_sinking_scenario() {
    let mut board = Board::new();
    // would run off-grid at the right edge
    assert!(!board.can_place(2, 0, 9, Orientation::Horizontal));

    board
        .place_ship(ShipSpec::new("Patrol", 2), 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.receive_attack(0, 0), Some(ShotResult::Hit));
    assert_eq!(board.receive_attack(0, 1), Some(ShotResult::Sunk("Patrol")));
    assert!(board.all_sunk());
}

#[test]
fn miss_on_empty_board_records_coordinate_once() {
    let mut board = Board::new();
    assert_eq!(board.receive_attack(5, 5), Some(ShotResult::Miss));
    assert_eq!(board.misses(), &[(5, 5)]);

    // repeat is rejected and leaves the miss list untouched
    assert_eq!(board.receive_attack(5, 5), None);
    assert_eq!(board.misses().len(), 1);
}

#[test]
fn repeat_attack_rejected_after_a_hit_too() {
    let mut board = Board::new();
    board
        .place_ship(ShipSpec::new("Patrol", 2), 4, 4, Orientation::Vertical)
        .unwrap();
    assert_eq!(board.receive_attack(4, 4), Some(ShotResult::Hit));
    assert_eq!(board.receive_attack(4, 4), None);
    assert_eq!(board.ships()[0].hit_count(), 1);
}

#[test]
fn out_of_bounds_attacks_are_rejected() {
    let mut board = Board::new();
    assert_eq!(board.receive_attack(10, 0), None);
    assert_eq!(board.receive_attack(0, 10), None);
    assert!(board.misses().is_empty());
    assert!(board.attacked().is_empty());
}

#[test]
fn extreme_coordinates_fail_the_placement_check_without_panicking() {
    let mut board = Board::new();
    assert!(!board.can_place(2, 0, usize::MAX, Orientation::Horizontal));
    assert!(!board.can_place(2, usize::MAX, 0, Orientation::Vertical));
    assert!(!board.can_place(usize::MAX, 0, 0, Orientation::Horizontal));
    assert_eq!(
        board
            .place_ship(ShipSpec::new("Patrol", 2), usize::MAX, usize::MAX, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board, Board::new());
}

#[test]
fn overlapping_placement_is_refused() {
    let mut board = Board::new();
    board
        .place_ship(ShipSpec::new("Cruiser", 3), 2, 2, Orientation::Horizontal)
        .unwrap();
    assert!(!board.can_place(3, 2, 2, Orientation::Horizontal));
    assert!(!board.can_place(2, 1, 3, Orientation::Vertical));
    assert_eq!(
        board
            .place_ship(ShipSpec::new("Sub", 3), 2, 3, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
}

#[test]
fn failed_placement_leaves_board_untouched() {
    let mut board = Board::new();
    board
        .place_ship(ShipSpec::new("Cruiser", 3), 0, 0, Orientation::Horizontal)
        .unwrap();
    let before = board.clone();

    assert_eq!(
        board
            .place_ship(ShipSpec::new("Carrier", 5), 0, 2, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board
            .place_ship(ShipSpec::new("Carrier", 5), 9, 7, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board, before);
}

#[test]
fn all_sunk_flips_only_on_the_final_segment() {
    let mut board = Board::new();
    board
        .place_ship(ShipSpec::new("Cruiser", 3), 6, 1, Orientation::Horizontal)
        .unwrap();
    assert!(!board.all_sunk());
    board.receive_attack(6, 1);
    board.receive_attack(6, 3);
    // misses around the ship change nothing
    board.receive_attack(7, 1);
    assert!(!board.all_sunk());
    board.receive_attack(6, 2);
    assert!(board.all_sunk());
}

#[test]
fn random_fleet_covers_the_expected_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for spec in FLEET {
        let (r, c, o) = board.random_placement(&mut rng, spec.length()).unwrap();
        board.place_ship(spec, r, c, o).unwrap();
    }
    let view = board.view();
    let occupied = view
        .cells
        .iter()
        .flatten()
        .filter(|cell| cell.occupied)
        .count();
    let expected: usize = FLEET.iter().map(|s| s.length()).sum();
    assert_eq!(occupied, expected, "fleet must not overlap");
}

#[test]
fn view_reports_hits_without_exposing_ships() {
    let mut board = Board::new();
    board
        .place_ship(ShipSpec::new("Patrol", 2), 3, 3, Orientation::Horizontal)
        .unwrap();
    board.receive_attack(3, 3);
    board.receive_attack(0, 0);

    let view = board.view();
    assert!(view.cells[3][3].occupied && view.cells[3][3].hit);
    assert!(view.cells[3][4].occupied && !view.cells[3][4].hit);
    assert!(!view.cells[0][0].occupied);
    assert_eq!(view.misses, vec![(0, 0)]);
}
