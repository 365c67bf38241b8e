use tui_merge::core::{PlaySession, SessionConfig, SessionSnapshot, SimpleRng, SnapshotError};
use tui_merge::types::Direction;

fn played(seed: u32, moves: usize) -> PlaySession {
    let config = SessionConfig::builder().max_undos(2).build().unwrap();
    let mut session = PlaySession::new(config, SimpleRng::new(seed)).unwrap();
    for step in 0..moves {
        let _ = session.apply_move(Direction::ALL[step % 4]);
    }
    session
}

#[test]
fn snapshot_survives_json() {
    let session = played(11, 40);
    let snap = session.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snap);

    let restored = PlaySession::from_snapshot(decoded, SimpleRng::new(1)).unwrap();
    assert_eq!(restored.current(), session.current());
    assert_eq!(restored.score(), session.score());
    assert_eq!(restored.remaining_lives(), session.remaining_lives());
    assert_eq!(restored.history().len(), session.history().len());
    assert_eq!(restored.highest_number(), session.highest_number());
}

#[test]
fn snapshot_json_uses_camel_case() {
    let json = serde_json::to_value(played(3, 4).snapshot()).unwrap();

    assert!(json.get("remainingLives").is_some());
    assert!(json.get("highestNumber").is_some());
    assert!(json["config"].get("acceptedSpawnables").is_some());
    assert!(json["history"][0]["rows"].is_array());
}

#[test]
fn restored_session_keeps_playing() {
    let snap = played(8, 10).snapshot();
    let mut restored = PlaySession::from_snapshot(snap, SimpleRng::new(8)).unwrap();

    let moved = Direction::ALL
        .iter()
        .any(|&d| restored.apply_move(d).is_ok());
    assert!(moved || restored.is_game_over() || !restored.can_move());
}

#[test]
fn tampered_json_is_rejected() {
    let mut json = serde_json::to_value(played(21, 12).snapshot()).unwrap();
    json["history"][0]["rows"] = serde_json::json!([[2, 2, 2, 2], [0, 0, 0, 0]]);

    let snap: SessionSnapshot = serde_json::from_value(json).unwrap();
    let err = PlaySession::from_snapshot(snap, SimpleRng::new(1)).unwrap_err();
    assert!(matches!(err, SnapshotError::DimensionMismatch { entry: 0, .. }));
}

#[test]
fn invalid_config_in_snapshot_is_rejected() {
    let mut json = serde_json::to_value(played(4, 3).snapshot()).unwrap();
    json["config"]["acceptedSpawnables"] = serde_json::json!([]);

    let snap: SessionSnapshot = serde_json::from_value(json).unwrap();
    assert!(matches!(
        PlaySession::from_snapshot(snap, SimpleRng::new(1)).unwrap_err(),
        SnapshotError::Config(_)
    ));
}
