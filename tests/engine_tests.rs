use broadside::{Coord, GameEngine, ShipStatus, ShotOutcome, BOARD_SIZE, FLEET, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn fresh_engine(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.reset(&mut rng).unwrap();
    engine
}

#[test]
fn test_reset_places_manifest_fleet() {
    let engine = fresh_engine(42);
    assert_eq!(engine.ships().len(), NUM_SHIPS);

    let mut seen = BTreeSet::new();
    for (ship, class) in engine.ships().iter().zip(FLEET) {
        assert_eq!(ship.name(), class.name());
        assert_eq!(ship.length(), class.length());
        assert_eq!(ship.status(), ShipStatus::Intact);
        for &cell in ship.original_cells() {
            assert!(cell.row < BOARD_SIZE && cell.col < BOARD_SIZE);
            assert!(seen.insert(cell), "ships overlap at {}", cell);
        }
    }
    assert_eq!(seen.len(), 13);
}

#[test]
fn test_fire_at_every_cell_sinks_the_fleet() {
    let mut engine = fresh_engine(7);
    let mut hits = 0;
    let mut sunk = 0;
    let mut misses = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match engine.fire_at(Coord::new(row, col)) {
                ShotOutcome::Hit => hits += 1,
                ShotOutcome::Sunk { .. } => sunk += 1,
                ShotOutcome::Miss => misses += 1,
                ShotOutcome::AlreadyFired => panic!("every cell fired exactly once"),
            }
        }
    }
    assert_eq!(sunk, NUM_SHIPS);
    assert_eq!(hits, 13 - NUM_SHIPS);
    assert_eq!(misses, 100 - 13);
    assert!(engine.all_sunk());
}

#[test]
fn test_repeat_fire_is_reported_and_inert() {
    let mut engine = fresh_engine(3);
    let first = engine.fire_shot("A1").unwrap();
    assert_ne!(first, ShotOutcome::AlreadyFired);
    assert_eq!(engine.fired_shots().len(), 1);

    let ships_before: Vec<_> = engine.ships().to_vec();
    assert_eq!(engine.fire_shot("A1").unwrap(), ShotOutcome::AlreadyFired);
    assert_eq!(engine.fired_shots().len(), 1);
    assert_eq!(engine.ships(), ships_before.as_slice());
}

#[test]
fn test_sinking_reports_full_footprint() {
    let mut engine = fresh_engine(11);
    let destroyer = &engine.ships()[1];
    assert_eq!(destroyer.name(), "Destroyer1");
    let cells: Vec<Coord> = destroyer.original_cells().to_vec();

    for &cell in &cells[..cells.len() - 1] {
        assert_eq!(engine.fire_at(cell), ShotOutcome::Hit);
    }
    match engine.fire_at(cells[cells.len() - 1]) {
        ShotOutcome::Sunk {
            name,
            cells: footprint,
        } => {
            assert_eq!(name, "Destroyer1");
            // includes the already-hit cells, not just the last one
            assert_eq!(footprint, cells);
        }
        other => panic!("expected sunk, got {:?}", other),
    }
    assert_eq!(engine.ships()[1].status(), ShipStatus::Sunk);
}

#[test]
fn test_invalid_input_does_not_mutate() {
    let mut engine = fresh_engine(5);
    assert!(engine.fire_shot("K1").is_err());
    assert!(engine.fire_shot("A11").is_err());
    assert!(engine.fired_shots().is_empty());
    assert!(engine
        .ships()
        .iter()
        .all(|ship| ship.status() == ShipStatus::Intact));
}

#[test]
fn test_current_cells_stay_subset_of_original() {
    let mut engine = fresh_engine(23);
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..40 {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        engine.fire_at(Coord::new(row, col));
        for ship in engine.ships() {
            assert!(ship
                .current_cells()
                .iter()
                .all(|cell| ship.original_cells().contains(cell)));
        }
    }
}

#[test]
fn test_reset_clears_history_and_damage() {
    let mut engine = fresh_engine(17);
    for row in 0..BOARD_SIZE {
        engine.fire_at(Coord::new(row, 0));
    }
    assert!(!engine.fired_shots().is_empty());

    let mut rng = SmallRng::seed_from_u64(18);
    engine.reset(&mut rng).unwrap();
    assert!(engine.fired_shots().is_empty());
    assert!(engine
        .ships()
        .iter()
        .all(|ship| ship.status() == ShipStatus::Intact));
}
