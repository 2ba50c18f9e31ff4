use tracing::{debug, error};

use crate::core::client::metrics_backend_trait::MetricsBackend;
use crate::domain::graph::dto::chart_image::ResolvedImage;
use crate::domain::graph::dto::metric_query::MetricQuery;
use crate::domain::graph::graph_error::{GraphError, GraphResult};

/// Run `queries` in order until they add up to exactly one chart.
///
/// Stops at the first query that pushes the running total past one; the
/// remaining queries are never sent.
pub async fn resolve_image<B>(backend: &B, queries: &[MetricQuery]) -> GraphResult<ResolvedImage>
where
    B: MetricsBackend + ?Sized,
{
    let mut charts: Vec<ResolvedImage> = Vec::new();

    for query in queries {
        let handles = backend.execute(query).await.map_err(|e| {
            error!("Query for template {} failed: {:#}", query.template_name, e);
            GraphError::backend(e)
        })?;
        debug!(
            "Template {} yields {} chart(s)",
            query.template_name,
            handles.len()
        );

        charts.extend(handles.into_iter().map(|handle| ResolvedImage {
            handle,
            template_name: query.template_name.clone(),
        }));

        if charts.len() > 1 {
            return Err(GraphError::Ambiguous);
        }
    }

    charts.pop().ok_or(GraphError::GraphNotFound)
}
