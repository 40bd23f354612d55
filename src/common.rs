//! Shot outcomes and engine errors.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Result of resolving one shot against the board.
///
/// `AlreadyFired` is a terminal outcome, not a failure: repeating a shot
/// leaves every ship untouched but must be reported distinctly from
/// `Hit`/`Miss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// This cell was targeted before; nothing changed.
    AlreadyFired,
    /// Shot landed on a ship that still has cells left.
    Hit,
    /// Shot removed a ship's last cell. Carries the ship's name and its
    /// full placement footprint so callers can render the whole ship.
    Sunk {
        name: &'static str,
        cells: Vec<Coord>,
    },
    /// Shot landed on open water.
    Miss,
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Shot text was malformed or off the board.
    InvalidCoordinate,
    /// Random placement exhausted its retry budget.
    PlacementFailed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate => {
                write!(f, "coordinate must be a letter A-J followed by a number 1-10")
            }
            GameError::PlacementFailed => write!(f, "unable to place ship"),
        }
    }
}
