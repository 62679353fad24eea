//! Fixture-driven replay tests.
//!
//! Each fixture under `tests/fixtures/` is a complete gesture script; the
//! assertions pin the exact callback sequence a controlled host would see.

use pretty_assertions::assert_eq;
use rz_engine::{Direction, Size};
use rz_replay::{Phase, Record, Replay, replay_str};

fn run(source: &str) -> Replay {
    replay_str(source).expect("fixture should parse")
}

fn rec(event: Phase, direction: Direction, width: f64, height: f64) -> Record {
    Record::new(event, direction, Size::new(width, height))
}

// ─── Single-handle gestures ─────────────────────────────────────────────

#[test]
fn bottom_right_drag() {
    let replay = run(include_str!("fixtures/bottom_right.json"));
    assert_eq!(
        replay.records,
        vec![
            rec(Phase::Start, Direction::BottomRight, 100.0, 100.0),
            rec(Phase::Resize, Direction::BottomRight, 150.0, 130.0),
            rec(Phase::Stop, Direction::BottomRight, 150.0, 130.0),
        ]
    );
    assert_eq!(replay.size, Size::new(150.0, 130.0));
    assert!(!replay.unfinished);
}

#[test]
fn scale_divides_screen_delta() {
    let replay = run(include_str!("fixtures/scaled.json"));
    assert_eq!(replay.size, Size::new(125.0, 115.0));
}

#[test]
fn deltas_accumulate_through_host_updates() {
    let replay = run(include_str!("fixtures/incremental.json"));
    let sizes: Vec<Size> = replay
        .records
        .iter()
        .filter(|r| r.event == Phase::Resize)
        .map(|r| r.size)
        .collect();
    assert_eq!(
        sizes,
        vec![
            Size::new(110.0, 105.0),
            Size::new(130.0, 115.0),
            Size::new(120.0, 115.0),
        ]
    );
    assert_eq!(
        replay.records.last(),
        Some(&rec(Phase::Stop, Direction::TopLeft, 120.0, 115.0))
    );
}

#[test]
fn shift_locks_aspect_only_while_held() {
    let replay = run(include_str!("fixtures/aspect_shift.json"));
    assert_eq!(
        replay.records,
        vec![
            rec(Phase::Start, Direction::Right, 100.0, 50.0),
            rec(Phase::Resize, Direction::Right, 120.0, 50.0),
            rec(Phase::Resize, Direction::Right, 180.0, 75.0),
            rec(Phase::Stop, Direction::Right, 180.0, 75.0),
        ]
    );
}

#[test]
fn rotation_is_compensated() {
    let replay = run(include_str!("fixtures/rotated.json"));
    assert!((replay.size.width - 100.0).abs() < 1e-9, "{:?}", replay.size);
    assert!((replay.size.height - 130.0).abs() < 1e-9, "{:?}", replay.size);
}

#[test]
fn min_width_floors_the_result() {
    let replay = run(include_str!("fixtures/min_width.json"));
    assert_eq!(replay.size, Size::new(50.0, 100.0));
}

// ─── Multi-pointer and incomplete scripts ───────────────────────────────

#[test]
fn two_pointers_drive_two_handles() {
    let replay = run(include_str!("fixtures/two_pointers.json"));
    assert_eq!(
        replay.records,
        vec![
            rec(Phase::Start, Direction::Right, 100.0, 100.0),
            rec(Phase::Start, Direction::Bottom, 100.0, 100.0),
            rec(Phase::Resize, Direction::Right, 110.0, 100.0),
            rec(Phase::Resize, Direction::Bottom, 110.0, 120.0),
            rec(Phase::Stop, Direction::Right, 110.0, 120.0),
            rec(Phase::Resize, Direction::Bottom, 110.0, 125.0),
            rec(Phase::Stop, Direction::Bottom, 110.0, 125.0),
        ]
    );
    assert!(!replay.unfinished);
}

#[test]
fn script_without_up_is_reported_unfinished() {
    let replay = run(include_str!("fixtures/unfinished.json"));
    assert!(replay.unfinished);
    assert_eq!(replay.size, Size::new(100.0, 110.0));
    assert_eq!(
        replay.records.iter().map(|r| r.event).collect::<Vec<_>>(),
        vec![Phase::Start, Phase::Resize]
    );
}

// ─── Errors and output ──────────────────────────────────────────────────

#[test]
fn unknown_direction_is_a_parse_error() {
    let err = replay_str(include_str!("fixtures/unknown_direction.json")).unwrap_err();
    assert!(err.contains("diagonal"), "{err}");
}

#[test]
fn json_lines_output() {
    let lines = run(include_str!("fixtures/bottom_right.json"))
        .to_json_lines()
        .unwrap();
    let events: Vec<serde_json::Value> = lines
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[1]["event"], "resize");
    assert_eq!(events[1]["direction"], "bottomRight");
    assert_eq!(events[1]["size"]["width"], 150.0);
    assert_eq!(events[2]["event"], "stop");
}
