//! Tests for the recurring re-decoration task.

use std::time::Duration;
use stormtrack::chart::{SyncRunner, decorations};

use crate::helpers::{RecordingRenderer, shared};

#[test]
fn test_runner_delivers_ticks_until_stopped() {
    let renderer = shared(RecordingRenderer::default());
    let decoration = decorations(4, Some(2));

    let mut runner = SyncRunner::spawn(
        "StormTracker-gust-bowen".to_string(),
        decoration.clone(),
        renderer.clone(),
        Duration::from_millis(10),
    );

    std::thread::sleep(Duration::from_millis(80));
    runner.stop();

    let after_stop = renderer.lock().ticks_for("StormTracker-gust-bowen");
    assert!(after_stop >= 2, "expected several ticks, got {}", after_stop);

    // No further ticks once stopped
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(
        renderer.lock().ticks_for("StormTracker-gust-bowen"),
        after_stop
    );
}

#[test]
fn test_every_tick_applies_the_same_decoration() {
    let renderer = shared(RecordingRenderer::default());
    let decoration = decorations(3, Some(0));

    let mut runner = SyncRunner::spawn(
        "anchor".to_string(),
        decoration.clone(),
        renderer.clone(),
        Duration::from_millis(5),
    );
    std::thread::sleep(Duration::from_millis(40));
    runner.stop();

    let recorded = renderer.lock();
    assert!(!recorded.decorations.is_empty());
    for (_, d) in &recorded.decorations {
        assert_eq!(d, &decoration);
    }
}

#[test]
fn test_stop_is_idempotent() {
    let renderer = shared(RecordingRenderer::default());
    let mut runner = SyncRunner::spawn(
        "anchor".to_string(),
        decorations(1, Some(0)),
        renderer.clone(),
        Duration::from_millis(5),
    );
    runner.stop();
    runner.stop();
}

#[test]
fn test_drop_stops_the_task() {
    let renderer = shared(RecordingRenderer::default());
    {
        let _runner = SyncRunner::spawn(
            "anchor".to_string(),
            decorations(2, None),
            renderer.clone(),
            Duration::from_millis(5),
        );
        std::thread::sleep(Duration::from_millis(20));
    }

    let after_drop = renderer.lock().ticks_for("anchor");
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(renderer.lock().ticks_for("anchor"), after_drop);
}
