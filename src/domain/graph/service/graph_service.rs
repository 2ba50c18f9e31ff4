use std::sync::Arc;

use tracing::{debug, info};

use crate::core::client::metrics_backend_trait::MetricsBackend;
use crate::core::client::monitoring_store_trait::MonitoringStore;
use crate::core::persistence::templates::graph_object_type::GraphObjectType;
use crate::core::persistence::templates::graph_template_api_repository_trait::GraphTemplateApiRepository;
use crate::core::persistence::templates::graph_template_entity::GraphTemplateEntity;
use crate::domain::graph::dto::chart_image::RenderedImage;
use crate::domain::graph::dto::filter_parameter_set::FilterParameterSet;
use crate::domain::graph::dto::monitored_object::MonitoredObject;
use crate::domain::graph::graph_error::{GraphError, GraphResult};
use crate::domain::graph::service::image_renderer::render_image;
use crate::domain::graph::service::image_resolver::resolve_image;
use crate::domain::graph::service::param_splitter::{split_params, SplitParams};
use crate::domain::graph::service::query_builder::{build_queries, escape_identity};
use crate::domain::graph::service::template_selector::select_templates;

/// Turns a host/service graph request into exactly one rendered image.
pub struct GraphService {
    monitoring_store: Arc<dyn MonitoringStore>,
    template_repository: Arc<dyn GraphTemplateApiRepository>,
    metrics_backend: Arc<dyn MetricsBackend>,
}

impl GraphService {
    pub fn new(
        monitoring_store: Arc<dyn MonitoringStore>,
        template_repository: Arc<dyn GraphTemplateApiRepository>,
        metrics_backend: Arc<dyn MetricsBackend>,
    ) -> Self {
        Self {
            monitoring_store,
            template_repository,
            metrics_backend,
        }
    }

    pub async fn supply_host_image(&self, raw: Vec<(String, String)>) -> GraphResult<RenderedImage> {
        let split = split_params(raw);
        let hostname = required(&split.filters, "hostname")?;
        self.supply_image(MonitoredObject::host(hostname), split).await
    }

    pub async fn supply_service_image(&self, raw: Vec<(String, String)>) -> GraphResult<RenderedImage> {
        let split = split_params(raw);
        let hostname = required(&split.filters, "hostname")?;
        let service = required(&split.filters, "service")?;
        self.supply_image(MonitoredObject::service(hostname, service), split)
            .await
    }

    pub fn list_templates(&self, object_type: GraphObjectType) -> GraphResult<Vec<GraphTemplateEntity>> {
        self.template_repository
            .templates_for(object_type)
            .map_err(|e| GraphError::Templates(format!("{:#}", e)))
    }

    async fn supply_image(&self, object: MonitoredObject, split: SplitParams) -> GraphResult<RenderedImage> {
        let SplitParams {
            presentation,
            mut filters,
        } = split;

        let exists = self
            .monitoring_store
            .lookup(&object)
            .await
            .map_err(GraphError::backend)?;
        if !exists {
            return Err(GraphError::ObjectNotFound(object.object_type));
        }

        escape_identity(&mut filters, &object);
        debug!("{} {}: {} filter(s)", object.object_type, object, filters.len());

        let templates = self.list_templates(object.object_type)?;
        let selected = select_templates(object.object_type, templates, presentation.template.as_deref());
        debug!(
            "{} {}: {} template(s) selected for {:?}",
            object.object_type,
            object,
            selected.len(),
            presentation.template
        );

        let queries = build_queries(&selected, &object, &filters);
        debug!("{} {}: {} quer(y/ies) built", object.object_type, object, queries.len());

        let resolved = resolve_image(self.metrics_backend.as_ref(), &queries).await?;
        info!(
            "{} {}: resolved graph {} via template {}",
            object.object_type,
            object,
            resolved.handle.target(),
            resolved.template_name
        );

        render_image(self.metrics_backend.as_ref(), &resolved.handle, &presentation).await
    }
}

fn required(filters: &FilterParameterSet, key: &'static str) -> GraphResult<String> {
    filters
        .get(key)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(GraphError::MissingParameter(key))
}
