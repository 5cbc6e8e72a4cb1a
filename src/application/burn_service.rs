// Burn control service - Use case for the start/stop triggers
use crate::application::patient_gateway::BurnControl;
use std::sync::Arc;

#[derive(Clone)]
pub struct BurnService {
    control: Arc<dyn BurnControl>,
}

impl BurnService {
    pub fn new(control: Arc<dyn BurnControl>) -> Self {
        Self { control }
    }

    pub async fn start(&self) -> anyhow::Result<()> {
        self.control.start_burn().await
    }

    pub async fn stop(&self) -> anyhow::Result<()> {
        self.control.stop_burn().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingControl {
        starts: AtomicUsize,
        stops: AtomicUsize,
    }

    #[async_trait]
    impl BurnControl for CountingControl {
        async fn start_burn(&self) -> anyhow::Result<()> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn stop_burn(&self) -> anyhow::Result<()> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn start_and_stop_each_issue_exactly_one_call() {
        let control = Arc::new(CountingControl::default());
        let service = BurnService::new(control.clone());

        service.start().await.unwrap();
        service.stop().await.unwrap();

        assert_eq!(control.starts.load(Ordering::SeqCst), 1);
        assert_eq!(control.stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_surface_as_errors() {
        struct RefusingControl;

        #[async_trait]
        impl BurnControl for RefusingControl {
            async fn start_burn(&self) -> anyhow::Result<()> {
                anyhow::bail!("connection refused")
            }

            async fn stop_burn(&self) -> anyhow::Result<()> {
                anyhow::bail!("connection refused")
            }
        }

        let service = BurnService::new(Arc::new(RefusingControl));
        assert!(service.start().await.is_err());
        assert!(service.stop().await.is_err());
    }
}
