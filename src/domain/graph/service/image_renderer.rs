use tracing::error;
use validator::Validate;

use crate::core::client::metrics_backend_trait::MetricsBackend;
use crate::core::util::graphite_util::GraphiteUtil;
use crate::domain::graph::dto::chart_image::{
    ChartImageHandle, RenderOptions, RenderedImage, PNG_CONTENT_TYPE,
};
use crate::domain::graph::dto::presentation_params::PresentationParams;
use crate::domain::graph::graph_error::{GraphError, GraphResult};

/// Coerce the raw presentation values: time window, then geometry, then legend.
pub fn render_options(params: &PresentationParams) -> GraphResult<RenderOptions> {
    let options = RenderOptions {
        from: params.start.clone(),
        until: params.end.clone(),
        width: parse_dimension("width", params.width.as_deref())?,
        height: parse_dimension("height", params.height.as_deref())?,
        legend: params.legend.as_deref().map(GraphiteUtil::is_truthy),
    };

    options
        .validate()
        .map_err(|e| GraphError::Backend(format!("invalid geometry: {}", e)))?;

    Ok(options)
}

fn parse_dimension(name: &str, raw: Option<&str>) -> GraphResult<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|_| GraphError::Backend(format!("invalid geometry: {}={:?}", name, v))),
    }
}

/// Draw `handle` with the requested presentation.
pub async fn render_image<B>(
    backend: &B,
    handle: &ChartImageHandle,
    params: &PresentationParams,
) -> GraphResult<RenderedImage>
where
    B: MetricsBackend + ?Sized,
{
    let options = render_options(params)?;

    let bytes = backend.render(handle, &options).await.map_err(|e| {
        error!("Rendering {} failed: {:#}", handle.target(), e);
        GraphError::backend(e)
    })?;

    Ok(RenderedImage {
        bytes,
        content_type: PNG_CONTENT_TYPE,
    })
}
