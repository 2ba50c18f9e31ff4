use async_trait::async_trait;

use crate::domain::graph::dto::monitored_object::MonitoredObject;

/// Source of truth for which hosts and services exist.
#[async_trait]
pub trait MonitoringStore: Send + Sync {
    /// `Ok(false)` when the object is unknown (or not visible to us).
    async fn lookup(&self, object: &MonitoredObject) -> anyhow::Result<bool>;
}
