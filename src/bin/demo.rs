//! End-to-end demo: builds a gust tracker from a canned observation table
//! and prints what the external collaborators would receive.

use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use stormtrack::chart::{ChartRenderer, ChartSpec, Decoration, WidgetHost};
use stormtrack::data::{TableGrid, TrackerResult, TrackerSource};
use stormtrack::widget::WidgetModel;
use stormtrack::{GUST, TrackerBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints every collaborator call instead of touching a page
#[derive(Default)]
struct ConsoleRenderer {
    decorations_seen: usize,
}

impl ChartRenderer for ConsoleRenderer {
    fn bind(&mut self, spec: &ChartSpec) -> TrackerResult<()> {
        println!("bind {} -> {}", spec.anchor, serde_json::to_string(spec).unwrap_or_default());
        Ok(())
    }

    fn decorate(&mut self, anchor: &str, decoration: &Decoration) -> TrackerResult<()> {
        self.decorations_seen += 1;
        let visible = decoration.points.iter().filter(|p| p.opacity > 0.0).count();
        info!(anchor, visible, tick = self.decorations_seen, "decorate");
        Ok(())
    }
}

struct ConsoleHost;

impl WidgetHost for ConsoleHost {
    fn mount(&mut self, model: &WidgetModel) -> TrackerResult<()> {
        println!("mount {}", serde_json::to_string_pretty(model).unwrap_or_default());
        Ok(())
    }
}

fn grid(cells: &[&[&str]]) -> Result<TableGrid> {
    Ok(TableGrid::from_rows(
        cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let series = grid(&[
        &["", "Bowen", "Mackay", "Proserpine Airport", "Hamilton Island"],
        &["6am", "87", "61", "-", "120"],
        &["9am", "94", "65", "72", "131"],
        &["12pm", "102", "-", "80", "154"],
        &["3pm", "-", "-", "-", "-"],
    ])?;
    let summary = grid(&[
        &["Bowen", "Mackay", "Proserpine Airport", "Hamilton Island"],
        &["44", "243", "-", "178"],
    ])?;

    let source = TrackerSource::located(Some(series))?.with_summary(summary);

    let renderer = Arc::new(Mutex::new(ConsoleRenderer::default()));
    let host = Arc::new(Mutex::new(ConsoleHost));

    let mut tracker = TrackerBuilder::new(&GUST)
        .renderer(renderer.clone())
        .host(host)
        .sync_interval(Duration::from_millis(100))
        .build(&source)?;

    // Let the sync loops produce a few ticks, then tear everything down
    std::thread::sleep(Duration::from_millis(350));
    tracker.dispose();

    let ticks = renderer.lock().decorations_seen;
    println!("sync loops delivered {ticks} decoration ticks");
    Ok(())
}
