//! Session configuration
//!
//! A [`SessionConfig`] is fixed for the lifetime of a play session. Build one
//! with [`SessionConfig::builder`] or start from `Default` (classic 4x4 rules).
//! The serde derives let a store load it from a file; anything read that way
//! must pass [`SessionConfig::validate`] before use.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Tile, DEFAULT_GOAL, DEFAULT_HEIGHT, DEFAULT_MAX_LIVES, DEFAULT_MAX_UNDOS, DEFAULT_SPAWNABLES,
    DEFAULT_STARTER_TILES, DEFAULT_WIDTH, EMPTY, MIN_SIDE,
};

/// Rules for one play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    height: usize,
    width: usize,
    max_undos: usize,
    max_lives: u32,
    goal: Tile,
    accepted_spawnables: Vec<Tile>,
    starter_tile_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            max_undos: DEFAULT_MAX_UNDOS,
            max_lives: DEFAULT_MAX_LIVES,
            goal: DEFAULT_GOAL,
            accepted_spawnables: DEFAULT_SPAWNABLES.to_vec(),
            starter_tile_count: DEFAULT_STARTER_TILES,
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Start a builder from this config, to override a few fields.
    pub fn to_builder(&self) -> SessionConfigBuilder {
        SessionConfigBuilder {
            config: self.clone(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn max_undos(&self) -> usize {
        self.max_undos
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn goal(&self) -> Tile {
        self.goal
    }

    /// Tile values new spawns draw from, in order, without duplicates
    pub fn accepted_spawnables(&self) -> &[Tile] {
        &self.accepted_spawnables
    }

    pub fn starter_tile_count(&self) -> usize {
        self.starter_tile_count
    }

    /// Check every rule a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height < MIN_SIDE || self.width < MIN_SIDE {
            return Err(ConfigError::GridTooSmall {
                height: self.height,
                width: self.width,
            });
        }
        if self.max_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.goal == EMPTY {
            return Err(ConfigError::ZeroGoal);
        }
        if self.accepted_spawnables.is_empty() {
            return Err(ConfigError::NoSpawnables);
        }
        if let Some(&bad) = self.accepted_spawnables.iter().find(|&&v| v == EMPTY) {
            return Err(ConfigError::InvalidSpawnable(bad));
        }
        for (i, value) in self.accepted_spawnables.iter().enumerate() {
            if self.accepted_spawnables[..i].contains(value) {
                return Err(ConfigError::DuplicateSpawnable(*value));
            }
        }
        let cells = self.height * self.width;
        if self.starter_tile_count > cells {
            return Err(ConfigError::TooManyStarters {
                count: self.starter_tile_count,
                cells,
            });
        }
        Ok(())
    }
}

/// Named-field overrides on top of the default rules.
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn size(mut self, height: usize, width: usize) -> Self {
        self.config.height = height;
        self.config.width = width;
        self
    }

    pub fn max_undos(mut self, max_undos: usize) -> Self {
        self.config.max_undos = max_undos;
        self
    }

    pub fn max_lives(mut self, max_lives: u32) -> Self {
        self.config.max_lives = max_lives;
        self
    }

    pub fn goal(mut self, goal: Tile) -> Self {
        self.config.goal = goal;
        self
    }

    /// Replace the spawnable set. Duplicates are dropped, first occurrence wins.
    pub fn spawnables(mut self, values: impl IntoIterator<Item = Tile>) -> Self {
        let mut out: Vec<Tile> = Vec::new();
        for value in values {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        self.config.accepted_spawnables = out;
        self
    }

    pub fn starter_tiles(mut self, count: usize) -> Self {
        self.config.starter_tile_count = count;
        self
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
