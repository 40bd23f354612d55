//! Core game state: hidden ship placements and the fired-shot history.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Direction, Orientation, Ship, ShipClass};

/// Owner of one game's state. Holds the fleet and every coordinate fired
/// at so far; nothing outside this type mutates either.
///
/// The engine is synchronous and assumes serialized calls. Callers that
/// share it across tasks must wrap the whole engine in a mutex so each
/// shot resolves to completion before the next begins.
pub struct GameEngine {
    ships: Vec<Ship>,
    fired_shots: BTreeSet<Coord>,
}

impl GameEngine {
    /// Create an engine with no ships placed and no shots recorded.
    pub fn new() -> Self {
        Self {
            ships: Vec::new(),
            fired_shots: BTreeSet::new(),
        }
    }

    /// Discard all state and place the fleet manifest afresh. The layout
    /// is random but always valid: every ship has exactly its manifest
    /// length of cells and no two ships share a cell.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ships.clear();
        self.fired_shots.clear();
        for class in FLEET {
            let ship = self.place_ship(rng, class)?;
            log::debug!("placed {} at {:?}", ship.name(), ship.original_cells());
            self.ships.push(ship);
        }
        Ok(())
    }

    /// Pick random placements for one ship until it fits without touching
    /// previously placed ships. The retry loop is capped so a degenerate
    /// manifest fails with `PlacementFailed` instead of spinning forever.
    fn place_ship<R: Rng>(&self, rng: &mut R, class: ShipClass) -> Result<Ship, GameError> {
        let len = class.length() as u8;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let direction = if rng.random() {
                Direction::Ascending
            } else {
                Direction::Descending
            };
            // The anchor is constrained along the stepping axis so all
            // `len` cells stay on the board; the cross axis is free.
            let anchor = match direction {
                Direction::Ascending => rng.random_range(0..=BOARD_SIZE - len),
                Direction::Descending => rng.random_range(len - 1..BOARD_SIZE),
            };
            let cross = rng.random_range(0..BOARD_SIZE);
            let step: i16 = match direction {
                Direction::Ascending => 1,
                Direction::Descending => -1,
            };
            let cells: Vec<Coord> = (0..len)
                .map(|i| {
                    let along = (anchor as i16 + step * i as i16) as u8;
                    match orientation {
                        Orientation::Horizontal => Coord::new(cross, along),
                        Orientation::Vertical => Coord::new(along, cross),
                    }
                })
                .collect();
            if cells.iter().any(|&cell| self.occupied(cell)) {
                log::trace!("placement of {} overlaps, retrying", class.name());
                continue;
            }
            return Ok(Ship::new(class.name(), cells));
        }
        Err(GameError::PlacementFailed)
    }

    fn occupied(&self, cell: Coord) -> bool {
        self.ships.iter().any(|ship| ship.occupies(cell))
    }

    /// Resolve a shot given in text notation ("A5"). Validation happens
    /// before any mutation, so bad input never corrupts state.
    pub fn fire_shot(&mut self, text: &str) -> Result<ShotOutcome, GameError> {
        let target = Coord::parse(text)?;
        Ok(self.fire_at(target))
    }

    /// Resolve a shot at a parsed coordinate.
    pub fn fire_at(&mut self, target: Coord) -> ShotOutcome {
        if self.fired_shots.contains(&target) {
            return ShotOutcome::AlreadyFired;
        }
        // Recorded permanently; the history only ever grows within a game.
        self.fired_shots.insert(target);

        // Placement guarantees no cell is shared, so at most one ship can
        // claim the target and scan order cannot change the outcome.
        for ship in &mut self.ships {
            if ship.register_hit(target) {
                if ship.is_sunk() {
                    log::info!("shot {} sank {}", target, ship.name());
                    return ShotOutcome::Sunk {
                        name: ship.name(),
                        cells: ship.original_cells().to_vec(),
                    };
                }
                log::info!("shot {} hit {}", target, ship.name());
                return ShotOutcome::Hit;
            }
        }
        log::info!("shot {} missed", target);
        ShotOutcome::Miss
    }

    /// Read-only view of the fleet, in manifest order. Ship state can only
    /// be changed through `fire_at`.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every coordinate fired at so far this game.
    pub fn fired_shots(&self) -> &BTreeSet<Coord> {
        &self.fired_shots
    }

    /// Returns `true` when every ship in the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|ship| ship.is_sunk())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
