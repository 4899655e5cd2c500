use flotilla::{BoardError, Ship, ShipSpec};

#[test]
fn fresh_ship_is_undamaged() {
    for length in 1..=5 {
        let ship = Ship::new(ShipSpec::new("Test", length)).unwrap();
        assert_eq!(ship.hit_count(), 0);
        assert!(!ship.is_sunk());
        assert_eq!(ship.length(), length);
    }
}

#[test]
fn zero_length_is_rejected() {
    assert_eq!(
        Ship::new(ShipSpec::new("Empty", 0)).unwrap_err(),
        BoardError::InvalidShipLength
    );
}

#[test]
fn sinks_after_hitting_every_segment() {
    let mut ship = Ship::new(ShipSpec::new("Test", 3)).unwrap();
    ship.register_hit(0);
    ship.register_hit(2);
    assert!(!ship.is_sunk());
    ship.register_hit(1);
    assert!(ship.is_sunk());
}

#[test]
fn repeat_hits_do_not_accumulate() {
    let mut ship = Ship::new(ShipSpec::new("Test", 2)).unwrap();
    ship.register_hit(0);
    ship.register_hit(0);
    ship.register_hit(0);
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn out_of_range_hits_are_no_ops() {
    let mut ship = Ship::new(ShipSpec::new("Test", 2)).unwrap();
    ship.register_hit(2);
    ship.register_hit(usize::MAX);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
    assert!(!ship.is_hit_at(2));
}

#[test]
fn segment_queries_are_bounds_checked() {
    let mut ship = Ship::new(ShipSpec::new("Test", 4)).unwrap();
    ship.register_hit(3);
    assert!(ship.is_hit_at(3));
    assert!(!ship.is_hit_at(0));
    assert!(!ship.is_hit_at(4));
}
