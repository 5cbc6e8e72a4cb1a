// Gateway traits for the doctor API
use crate::domain::metrics::MetricsSnapshot;
use async_trait::async_trait;

/// Read side of the doctor API: the poller's only view of the network.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch the latest metrics snapshot.
    async fn fetch_metrics(&self) -> anyhow::Result<MetricsSnapshot>;
}

/// Control side of the doctor API: one-shot burn triggers.
#[async_trait]
pub trait BurnControl: Send + Sync {
    /// Ask the patient to start burning.
    async fn start_burn(&self) -> anyhow::Result<()>;

    /// Ask the patient to stop burning.
    async fn stop_burn(&self) -> anyhow::Result<()>;
}
