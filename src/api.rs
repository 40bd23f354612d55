#![cfg(feature = "std")]

//! The seam between front ends and the engine: the same three operations
//! whether the game runs in-process or behind a service.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::game::GameEngine;
use crate::protocol::{ShipReport, ShotReport};

#[async_trait::async_trait]
pub trait GameApi: Send {
    /// Discard the game and place a fresh fleet. Returns a confirmation
    /// message for display.
    async fn reset(&mut self) -> anyhow::Result<String>;
    /// Fire at the given coordinate text.
    async fn fire(&mut self, position: &str) -> anyhow::Result<ShotReport>;
    /// Current fleet layout, in placement order.
    async fn ships(&mut self) -> anyhow::Result<Vec<ShipReport>>;
}

/// An in-process game: one engine plus the RNG that lays out its fleet.
pub struct LocalGame {
    engine: GameEngine,
    rng: SmallRng,
}

impl LocalGame {
    /// Create a game with no fleet placed yet; call `reset` to lay one out.
    /// A fixed seed makes layouts reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            engine: GameEngine::new(),
            rng,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

#[async_trait::async_trait]
impl GameApi for LocalGame {
    async fn reset(&mut self) -> anyhow::Result<String> {
        self.engine
            .reset(&mut self.rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok("Game has been reset!".to_string())
    }

    async fn fire(&mut self, position: &str) -> anyhow::Result<ShotReport> {
        let outcome = self
            .engine
            .fire_shot(position)
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(ShotReport::from(outcome))
    }

    async fn ships(&mut self) -> anyhow::Result<Vec<ShipReport>> {
        Ok(self.engine.ships().iter().map(ShipReport::from).collect())
    }
}

/// A game shared between connections. Each operation holds the lock from
/// the shot-history read through the mutation, so interleaved callers can
/// neither double-credit a hit nor race the already-fired check.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<LocalGame>>,
}

impl SharedGame {
    pub fn new(game: LocalGame) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }
}

#[async_trait::async_trait]
impl GameApi for SharedGame {
    async fn reset(&mut self) -> anyhow::Result<String> {
        self.inner.lock().await.reset().await
    }

    async fn fire(&mut self, position: &str) -> anyhow::Result<ShotReport> {
        self.inner.lock().await.fire(position).await
    }

    async fn ships(&mut self) -> anyhow::Result<Vec<ShipReport>> {
        self.inner.lock().await.ships().await
    }
}
