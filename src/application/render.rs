// Render capability injected into the poller
use crate::domain::metrics::MetricsSnapshot;

/// Sink for fetched snapshots. The poller never touches the terminal
/// directly; tests substitute a recording implementation.
pub trait SnapshotRenderer: Send + Sync {
    fn render(&self, snapshot: &MetricsSnapshot);
}
