use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 3;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Battleship", 5),
    ShipClass::new("Destroyer1", 4),
    ShipClass::new("Destroyer2", 4),
];

/// Retry budget for the random placement of a single ship. The shipped
/// fleet covers 13 of 100 cells, so a handful of attempts suffices in
/// practice; the cap exists to guarantee termination for denser manifests.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
