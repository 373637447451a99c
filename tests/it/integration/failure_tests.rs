//! Fatal-path tests: structural failures must abort before any page
//! mutation, leaving the collaborators untouched.

use stormtrack::data::{TableGrid, TrackerError, TrackerSource};
use stormtrack::{GUST, TrackerBuilder};

use crate::helpers::{RecordingHost, RecordingRenderer, grid, gust_series, shared};

#[test]
fn test_blank_header_aborts_before_mount() {
    let source = TrackerSource::located(Some(grid(&[
        &["", " ", "  "],
        &["6am", "87", "61"],
    ])))
    .unwrap();

    let renderer = shared(RecordingRenderer::default());
    let host = shared(RecordingHost::default());
    let err = TrackerBuilder::new(&GUST)
        .renderer(renderer.clone())
        .host(host.clone())
        .build(&source)
        .unwrap_err();

    assert!(matches!(err, TrackerError::MalformedTable(_)));
    assert!(host.lock().mounted.is_empty());
    assert!(renderer.lock().bound.is_empty());
    assert!(renderer.lock().decorations.is_empty());
}

#[test]
fn test_summary_mismatch_aborts_before_mount() {
    let summary = grid(&[&["Bowen", "Mackay"], &["44", "243"]]);
    let source = TrackerSource::located(Some(gust_series()))
        .unwrap()
        .with_summary(summary);

    let renderer = shared(RecordingRenderer::default());
    let host = shared(RecordingHost::default());
    let err = TrackerBuilder::new(&GUST)
        .renderer(renderer)
        .host(host.clone())
        .build(&source)
        .unwrap_err();

    assert!(matches!(err, TrackerError::MalformedTable(_)));
    assert!(host.lock().mounted.is_empty());
}

#[test]
fn test_missing_renderer_is_a_dependency_error() {
    let source = TrackerSource::located(Some(gust_series())).unwrap();
    let host = shared(RecordingHost::default());

    let err = TrackerBuilder::new(&GUST)
        .host(host.clone())
        .build(&source)
        .unwrap_err();

    assert!(matches!(err, TrackerError::DependencyUnavailable(_)));
    assert!(host.lock().mounted.is_empty());
}

#[test]
fn test_missing_host_is_a_dependency_error() {
    let source = TrackerSource::located(Some(gust_series())).unwrap();
    let renderer = shared(RecordingRenderer::default());

    let err = TrackerBuilder::new(&GUST)
        .renderer(renderer.clone())
        .build(&source)
        .unwrap_err();

    assert!(matches!(err, TrackerError::DependencyUnavailable(_)));
    assert!(renderer.lock().bound.is_empty());
}

#[test]
fn test_absent_source_table() {
    let err = TrackerSource::located(None).unwrap_err();
    assert!(matches!(err, TrackerError::SourceNotFound));
}

#[test]
fn test_ragged_grid_rejected_at_the_boundary() {
    let err = TableGrid::from_rows(vec![
        vec!["".into(), "Bowen".into()],
        vec!["6am".into(), "87".into(), "61".into()],
    ])
    .unwrap_err();
    assert!(matches!(err, TrackerError::MalformedTable(_)));
}
