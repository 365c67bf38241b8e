//! Play session - undo chain, lives and goal tracking
//!
//! This module ties together all core components: grid, slide engine, spawn
//! source and history. A session is either `Active` or `GameOver`; the only
//! way out of `GameOver` is [`PlaySession::restart`].
//!
//! A successful move:
//! 1. slides a copy of the current grid (rejected with `CannotMove` if nothing changes),
//! 2. pushes it onto the history, evicting the oldest state when full,
//! 3. spawns one tile and updates the running maximum,
//! 4. costs a life if the new grid has no legal move, ending the session on the
//!    last one or when there is no state to undo back to,
//! 5. latches the goal the first time the maximum reaches it.

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{ConfigError, MoveError, SnapshotError, UndoError};
use crate::event::{GameEvent, MoveEvents};
use crate::grid::GridState;
use crate::history::HistoryChain;
use crate::rng::{SimpleRng, SpawnRng};
use crate::slide::{can_move, legal_directions, slide, SlideOutcome};
use crate::snapshot::{GridSnapshot, SessionSnapshot};
use crate::spawn::{place, place_many, Spawn};
use crate::types::{Direction, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    GameOver,
}

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The grid still has a legal move.
    Moved,
    /// No legal move is left; a life was lost but others remain.
    GridStuck { remaining_lives: u32 },
    /// No legal move is left and that was the last life.
    GameOver,
}

/// Everything a successful move produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub outcome: MoveOutcome,
    /// Score earned by merges in this move
    pub gained: u64,
    pub merges: usize,
    pub spawn: Option<Spawn>,
    /// Events published by this move, in order
    pub events: MoveEvents,
}

/// One game from the first tile to game over.
#[derive(Debug, Clone)]
pub struct PlaySession<R = SimpleRng> {
    config: SessionConfig,
    history: HistoryChain,
    remaining_lives: u32,
    highest_number: Tile,
    goal_reached: bool,
    status: SessionStatus,
    /// Published but not yet drained events
    events: Vec<GameEvent>,
    rng: R,
}

impl<R: SpawnRng> PlaySession<R> {
    /// Start a new game: empty grid plus the configured starter tiles.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = fresh_history(&config, &mut rng);
        let highest_number = history.current().max_tile();

        info!(
            height = config.height(),
            width = config.width(),
            goal = config.goal(),
            "new session"
        );

        Ok(Self {
            remaining_lives: config.max_lives(),
            config,
            history,
            highest_number,
            goal_reached: false,
            status: SessionStatus::Active,
            events: Vec::new(),
            rng,
        })
    }

    /// Start a game from a prepared grid instead of starter tiles.
    pub fn from_grid(config: SessionConfig, grid: GridState, rng: R) -> Result<Self, SnapshotError> {
        config.validate()?;
        check_dimensions(&config, &grid, 0)?;

        Ok(Self {
            remaining_lives: config.max_lives(),
            highest_number: grid.max_tile(),
            history: HistoryChain::new(grid, config.max_undos()),
            config,
            goal_reached: false,
            status: SessionStatus::Active,
            events: Vec::new(),
            rng,
        })
    }

    /// Rebuild a session from persisted data.
    ///
    /// Every history entry must match the configured dimensions and the chain
    /// must fit the undo limit. Lives must agree with the game-over flag, and an
    /// active session must not be stuck with nothing to undo. Nothing is repaired.
    pub fn from_snapshot(snapshot: SessionSnapshot, rng: R) -> Result<Self, SnapshotError> {
        let SessionSnapshot {
            config,
            history,
            remaining_lives,
            highest_number,
            goal_reached,
            game_over,
        } = snapshot;

        config.validate()?;
        if history.is_empty() {
            return Err(SnapshotError::EmptyHistory);
        }
        let capacity = config.max_undos() + 1;
        if history.len() > capacity {
            return Err(SnapshotError::HistoryTooLong {
                len: history.len(),
                capacity,
            });
        }
        if !game_over && remaining_lives == 0 {
            return Err(SnapshotError::NoLivesLeft);
        }
        if game_over && remaining_lives > 0 {
            return Err(SnapshotError::LivesAfterGameOver { remaining_lives });
        }
        if remaining_lives > config.max_lives() {
            return Err(SnapshotError::TooManyLives {
                remaining_lives,
                max_lives: config.max_lives(),
            });
        }

        let mut states = Vec::with_capacity(history.len());
        for (entry, grid) in history.iter().enumerate() {
            let state = GridState::try_from(grid)
                .map_err(|source| SnapshotError::Grid { entry, source })?;
            check_dimensions(&config, &state, entry)?;
            if state.max_tile() > highest_number {
                warn!(entry, highest_number, "snapshot tile exceeds recorded maximum");
                return Err(SnapshotError::InconsistentHighest {
                    highest: highest_number,
                    tile: state.max_tile(),
                });
            }
            states.push(state);
        }

        let history = HistoryChain::from_states(states, config.max_undos()).ok_or(
            SnapshotError::HistoryTooLong {
                len: history.len(),
                capacity,
            },
        )?;
        if !game_over && history.remaining_undos() == 0 && !can_move(history.current()) {
            return Err(SnapshotError::StuckWithoutUndo);
        }

        Ok(Self {
            config,
            history,
            remaining_lives,
            highest_number,
            goal_reached,
            status: if game_over {
                SessionStatus::GameOver
            } else {
                SessionStatus::Active
            },
            events: Vec::new(),
            rng,
        })
    }

    /// Slide all tiles toward `direction` and advance the session.
    ///
    /// `Err` means nothing happened: the direction was blocked or the session
    /// is over. Losing a life or the game is reported through
    /// [`MoveReport::outcome`], since the move itself did take place.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveReport, MoveError> {
        if self.status == SessionStatus::GameOver {
            return Err(MoveError::SessionOver);
        }

        let current = self.history.current();
        let slid = slide(current, direction);
        if !slid.changed(current) {
            debug!(direction = direction.as_str(), "move rejected: nothing slides");
            return Err(MoveError::CannotMove(direction));
        }
        let SlideOutcome {
            state,
            merges,
            gained,
        } = slid;

        let mut events = MoveEvents::new();

        if self.history.push(state) {
            debug!(max_undos = self.history.max_undos(), "oldest state evicted");
        } else {
            events.push(GameEvent::UndoCountChanged {
                remaining: self.history.remaining_undos(),
            });
        }
        events.push(GameEvent::MoveHappened { direction, gained });

        let spawn = place(
            self.history.current_mut(),
            self.config.accepted_spawnables(),
            &mut self.rng,
        );

        let max = self.history.current().max_tile();
        if max > self.highest_number {
            self.highest_number = max;
            events.push(GameEvent::MaxNumberChanged { highest: max });
        }

        let outcome = if can_move(self.history.current()) {
            MoveOutcome::Moved
        } else {
            self.remaining_lives = if self.history.remaining_undos() == 0 {
                // Stuck with nothing to undo: no life can be played.
                0
            } else {
                self.remaining_lives.saturating_sub(1)
            };
            events.push(GameEvent::LivesChanged {
                remaining: self.remaining_lives,
            });
            if self.remaining_lives == 0 {
                self.status = SessionStatus::GameOver;
                events.push(GameEvent::GameOver {
                    score: self.score(),
                });
                info!(score = self.score(), highest = self.highest_number, "game over");
                MoveOutcome::GameOver
            } else {
                events.push(GameEvent::GridStuck {
                    remaining_lives: self.remaining_lives,
                });
                info!(remaining_lives = self.remaining_lives, "grid stuck, life lost");
                MoveOutcome::GridStuck {
                    remaining_lives: self.remaining_lives,
                }
            }
        };

        if !self.goal_reached && self.highest_number >= self.config.goal() {
            self.goal_reached = true;
            events.push(GameEvent::GoalReached {
                goal: self.config.goal(),
            });
            info!(goal = self.config.goal(), "goal reached");
        }

        debug!(
            direction = direction.as_str(),
            gained,
            merges = merges.len(),
            score = self.score(),
            "move applied"
        );

        self.events.extend(events.iter().copied());
        Ok(MoveReport {
            direction,
            outcome,
            gained,
            merges: merges.len(),
            spawn,
            events,
        })
    }

    /// Step back to the previous grid state.
    ///
    /// Score returns to the earlier value with the grid; lives and the
    /// running maximum are left alone.
    pub fn undo(&mut self) -> Result<&GridState, UndoError> {
        if self.status == SessionStatus::GameOver {
            return Err(UndoError::SessionOver);
        }
        if self.history.pop().is_none() {
            return Err(UndoError::UndoImpossible);
        }

        let remaining = self.history.remaining_undos();
        self.events.push(GameEvent::UndoCountChanged { remaining });
        debug!(remaining, "undo");
        Ok(self.history.current())
    }

    /// Throw the game away and start over with the same config.
    pub fn restart(&mut self) {
        self.history = fresh_history(&self.config, &mut self.rng);
        self.highest_number = self.history.current().max_tile();
        self.remaining_lives = self.config.max_lives();
        self.goal_reached = false;
        self.status = SessionStatus::Active;
        self.events.clear();
        info!("session restarted");
    }

    /// Take the events published since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Capture the session for persistence.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            history: self.history.iter().map(GridSnapshot::from).collect(),
            remaining_lives: self.remaining_lives,
            highest_number: self.highest_number,
            goal_reached: self.goal_reached,
            game_over: self.status == SessionStatus::GameOver,
        }
    }

    /// Whether any direction would change the current grid
    pub fn can_move(&self) -> bool {
        can_move(self.history.current())
    }

    pub fn legal_directions(&self) -> [bool; 4] {
        legal_directions(self.history.current())
    }
}

impl<R> PlaySession<R> {
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn current(&self) -> &GridState {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryChain {
        &self.history
    }

    pub fn score(&self) -> u64 {
        self.history.current().score()
    }

    pub fn remaining_undos(&self) -> usize {
        self.history.remaining_undos()
    }

    pub fn remaining_lives(&self) -> u32 {
        self.remaining_lives
    }

    pub fn highest_number(&self) -> Tile {
        self.highest_number
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

/// Empty grid plus starter tiles, as a one-entry history. `config` must be valid.
fn fresh_history<R: SpawnRng + ?Sized>(config: &SessionConfig, rng: &mut R) -> HistoryChain {
    let mut grid = GridState::blank(config.height(), config.width());
    let placed = place_many(
        &mut grid,
        config.accepted_spawnables(),
        config.starter_tile_count(),
        rng,
    );
    debug!(starter_tiles = placed.len(), "fresh grid");
    HistoryChain::new(grid, config.max_undos())
}

fn check_dimensions(
    config: &SessionConfig,
    grid: &GridState,
    entry: usize,
) -> Result<(), SnapshotError> {
    if grid.height() != config.height() || grid.width() != config.width() {
        return Err(SnapshotError::DimensionMismatch {
            entry,
            height: config.height(),
            width: config.width(),
            found_height: grid.height(),
            found_width: grid.width(),
        });
    }
    Ok(())
}
