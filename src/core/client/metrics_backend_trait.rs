use async_trait::async_trait;

use crate::domain::graph::dto::chart_image::{ChartImageHandle, RenderOptions};
use crate::domain::graph::dto::metric_query::MetricQuery;

/// Time-series backend that can resolve queries to series and draw them.
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    /// Every series matching `query`, in backend order.
    async fn execute(&self, query: &MetricQuery) -> anyhow::Result<Vec<ChartImageHandle>>;

    /// Draw one series and return the encoded image.
    async fn render(&self, handle: &ChartImageHandle, options: &RenderOptions) -> anyhow::Result<Vec<u8>>;
}
