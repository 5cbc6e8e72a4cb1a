// Dashboard poller - fetches and renders the latest snapshot on a fixed interval
use crate::application::patient_gateway::MetricsSource;
use crate::application::render::SnapshotRenderer;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

#[derive(Clone)]
pub struct DashboardPoller {
    source: Arc<dyn MetricsSource>,
    renderer: Arc<dyn SnapshotRenderer>,
}

impl DashboardPoller {
    pub fn new(source: Arc<dyn MetricsSource>, renderer: Arc<dyn SnapshotRenderer>) -> Self {
        Self { source, renderer }
    }

    /// One poll cycle: fetch the latest snapshot and hand it to the renderer.
    /// A failed fetch renders nothing and leaves the schedule untouched.
    pub async fn tick(&self) {
        match self.source.fetch_metrics().await {
            Ok(snapshot) => self.renderer.render(&snapshot),
            Err(e) => tracing::warn!("metrics fetch failed: {e:#}"),
        }
    }

    /// Tick forever at the given interval. Each firing spawns an independent
    /// tick, so a slow response never delays the next firing. In-flight ticks
    /// are not cancelled; overlapping responses may render out of order and
    /// the last one to arrive wins the repaint.
    pub async fn run(&self, interval: Duration) {
        let mut ticks = IntervalStream::new(tokio::time::interval(interval));
        while ticks.next().await.is_some() {
            let poller = self.clone();
            tokio::spawn(async move { poller.tick().await });
        }
    }
}
