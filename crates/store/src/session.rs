//! Saved games.
//!
//! Only the snapshot is written; the random generator is not part of a save
//! and a resumed game spawns from whatever generator the caller supplies.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::SessionSnapshot;
use crate::json::{read_json, write_json};

pub fn save_session(path: impl AsRef<Path>, snapshot: &SessionSnapshot) -> Result<()> {
    let path = path.as_ref();
    write_json(path, snapshot).context("failed to save session")?;
    tracing::info!(
        score = snapshot.score(),
        entries = snapshot.history.len(),
        "saved session to {}",
        path.display()
    );
    Ok(())
}

/// Load a saved game. `Ok(None)` when there is no save file.
///
/// The snapshot is only decoded here; rebuilding a session from it runs the
/// full consistency checks.
pub fn load_session(path: impl AsRef<Path>) -> Result<Option<SessionSnapshot>> {
    let path = path.as_ref();
    let snapshot: Option<SessionSnapshot> =
        read_json(path).context("failed to load session")?;

    if let Some(snapshot) = &snapshot {
        tracing::info!(
            score = snapshot.score(),
            game_over = snapshot.game_over,
            "loaded session from {}",
            path.display()
        );
    }
    Ok(snapshot)
}

/// Delete a save file if present.
pub fn remove_session(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
        tracing::info!("removed save {}", path.display());
    }
    Ok(())
}
