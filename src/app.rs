//! Game loop glue between key actions, the play session and the store.
//!
//! `App` turns each [`GameAction`] into a session call, drains the events the
//! session published and keeps a one-line status message for the view.
//! Nothing here touches the terminal.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::core::{GameEvent, MoveError, PlaySession, SessionConfig, SimpleRng, UndoError};
use crate::store::{self, HighScoreEntry, HighScores};
use crate::term::SessionView;
use crate::types::GameAction;

pub struct App {
    session: PlaySession<SimpleRng>,
    message: Option<String>,
    save_path: PathBuf,
    scores_path: PathBuf,
    scores: HighScores,
    player: String,
    /// Whether the finished game already went into the score table.
    recorded: bool,
}

impl App {
    /// Load config, scores and any saved game named by `cli`.
    ///
    /// A save that cannot be read or fails validation is logged and replaced
    /// by a new game.
    pub fn start(cli: &CliArgs) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => store::load_config(path)?,
            None => SessionConfig::default(),
        };
        let scores = HighScores::load(&cli.scores)?;
        let rng = SimpleRng::new(cli.seed.unwrap_or_else(clock_seed));

        let saved = match store::load_session(&cli.save) {
            Ok(snapshot) => snapshot.map(|snapshot| {
                PlaySession::from_snapshot(snapshot, rng.clone()).map_err(anyhow::Error::from)
            }),
            Err(err) => Some(Err(err)),
        };
        let (session, message) = match saved {
            Some(Ok(session)) => (session, Some(String::from("resumed saved game"))),
            Some(Err(err)) => {
                warn!(error = %format!("{err:#}"), "discarding save {}", cli.save.display());
                (
                    PlaySession::new(config, rng)?,
                    Some(format!("save ignored: {:#}", err)),
                )
            }
            None => (PlaySession::new(config, rng)?, None),
        };

        Ok(Self::with_session(session, cli, scores).with_message(message))
    }

    /// Wrap an existing session; used by `start` and by tests.
    pub fn with_session(session: PlaySession<SimpleRng>, cli: &CliArgs, scores: HighScores) -> Self {
        let recorded = session.is_game_over();
        Self {
            session,
            message: None,
            save_path: cli.save.clone(),
            scores_path: cli.scores.clone(),
            scores,
            player: cli.name.clone(),
            recorded,
        }
    }

    fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn session(&self) -> &PlaySession<SimpleRng> {
        &self.session
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView::of(&self.session).with_message(self.message())
    }

    pub fn handle(&mut self, action: GameAction) {
        debug!(action = action.as_str(), "action");
        self.message = None;

        match action {
            GameAction::Move(direction) => match self.session.apply_move(direction) {
                Ok(_) => {}
                Err(MoveError::CannotMove(direction)) => {
                    self.message = Some(format!("can't move {}", direction.as_str()));
                }
                Err(MoveError::SessionOver) => {
                    self.message = Some(String::from("game over, press r to restart"));
                }
            },
            GameAction::Undo => match self.session.undo() {
                Ok(_) => {}
                Err(UndoError::UndoImpossible) => {
                    self.message = Some(String::from("nothing to undo"));
                }
                Err(UndoError::SessionOver) => {
                    self.message = Some(String::from("game over, press r to restart"));
                }
            },
            GameAction::Restart => {
                self.session.restart();
                self.recorded = false;
                self.message = Some(String::from("new game"));
            }
            GameAction::Save => {
                self.message = Some(match self.save() {
                    Ok(()) => format!("saved to {}", self.save_path.display()),
                    Err(err) => {
                        warn!(error = %format!("{err:#}"), "save failed");
                        format!("save failed: {}", err)
                    }
                });
            }
        }

        let events: Vec<GameEvent> = self.session.drain_events().collect();
        for event in events {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        debug!(event = event.as_str(), "session event");
        match event {
            GameEvent::UndoCountChanged { remaining } => {
                if self.message.is_none() && !self.session.is_game_over() {
                    self.message = Some(format!("{} undo(s) available", remaining));
                }
            }
            GameEvent::GridStuck { remaining_lives } => {
                self.message = Some(format!(
                    "stuck! {} live(s) left: undo or restart",
                    remaining_lives
                ));
            }
            GameEvent::GameOver { score } => {
                let rank = self.record_high_score();
                self.message = Some(match rank {
                    Some(rank) => format!("game over, score {} (#{} on the table)", score, rank + 1),
                    None => format!("game over, score {}", score),
                });
            }
            GameEvent::GoalReached { goal } => {
                self.message = Some(format!("{} reached! keep going", goal));
            }
            GameEvent::MoveHappened { .. }
            | GameEvent::MaxNumberChanged { .. }
            | GameEvent::LivesChanged { .. } => {}
        }
    }

    /// Enter the finished game into the score table once.
    fn record_high_score(&mut self) -> Option<usize> {
        if self.recorded {
            return None;
        }
        self.recorded = true;

        let entry = HighScoreEntry {
            name: self.player.clone(),
            score: self.session.score(),
            highest_tile: self.session.highest_number(),
        };
        let rank = self.scores.insert(entry)?;
        info!(rank, score = self.session.score(), "new high score");
        if let Err(err) = self.scores.save(&self.scores_path) {
            warn!(error = %format!("{err:#}"), "could not write high scores");
        }
        Some(rank)
    }

    pub fn save(&self) -> Result<()> {
        store::save_session(&self.save_path, &self.session.snapshot())
    }

    /// Persist on quit: a running game is saved, a finished one clears the save.
    pub fn save_on_exit(&self) -> Result<()> {
        if self.session.is_game_over() {
            store::remove_session(&self.save_path)
        } else {
            self.save()
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
