#![cfg(feature = "std")]

//! Wire messages exchanged between a game service and its clients, plus
//! the report records clients render from.

use serde::{Deserialize, Serialize};

use crate::common::ShotOutcome;
use crate::ship::Ship;

/// Messages exchanged between the game service and a remote client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Message {
    /// Fire at the given coordinate text (e.g. "A5").
    FireReq { position: String },
    /// Result of a fire request.
    FireResp(ShotReport),
    /// Request the current fleet layout.
    ShipsReq,
    /// Fleet layout, one report per ship in placement order.
    ShipsResp(Vec<ShipReport>),
    /// Discard the game and place a fresh fleet.
    ResetReq,
    /// Confirmation of a reset.
    ResetResp { message: String },
    /// Request could not be served; the session stays open.
    Error { message: String },
}

/// Outcome of one shot, shaped for display: a human-readable message plus
/// the sunk ship's name and full footprint when a ship went down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotReport {
    pub message: String,
    pub sunk_ship_name: Option<String>,
    pub sunk_cells: Option<Vec<[u8; 2]>>,
}

impl From<ShotOutcome> for ShotReport {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::AlreadyFired => Self {
                message: "Already fired here!".to_string(),
                sunk_ship_name: None,
                sunk_cells: None,
            },
            ShotOutcome::Hit => Self {
                message: "Hit!".to_string(),
                sunk_ship_name: None,
                sunk_cells: None,
            },
            ShotOutcome::Miss => Self {
                message: "Miss!".to_string(),
                sunk_ship_name: None,
                sunk_cells: None,
            },
            ShotOutcome::Sunk { name, cells } => Self {
                message: format!("{} Sunk!", name),
                sunk_ship_name: Some(name.to_string()),
                sunk_cells: Some(cells.iter().map(|c| [c.row, c.col]).collect()),
            },
        }
    }
}

/// One ship's public state: cells still afloat and the original footprint,
/// both as 0-based `[row, col]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipReport {
    pub name: String,
    pub cells: Vec<[u8; 2]>,
    pub original_cells: Vec<[u8; 2]>,
}

impl From<&Ship> for ShipReport {
    fn from(ship: &Ship) -> Self {
        Self {
            name: ship.name().to_string(),
            cells: ship.current_cells().iter().map(|c| [c.row, c.col]).collect(),
            original_cells: ship
                .original_cells()
                .iter()
                .map(|c| [c.row, c.col])
                .collect(),
        }
    }
}
