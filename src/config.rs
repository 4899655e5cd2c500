use crate::ship::ShipSpec;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Canonical fleet, fixed across the whole system.
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];
