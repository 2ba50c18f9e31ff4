use std::sync::Arc;

use anyhow::Result;

use crate::core::client::graphite_client::GraphiteWebBackend;
use crate::core::client::http_client::build_http_client;
use crate::core::client::icinga_client::IcingaApiMonitoringStore;
use crate::core::config::app_config::AppConfig;
use crate::core::persistence::templates::graph_template_repository::GraphTemplateRepository;
use crate::domain::graph::service::graph_service::GraphService;

#[derive(Clone)]
pub struct AppState {
    pub graph_service: Arc<GraphService>,
}

impl AppState {
    pub fn new(graph_service: GraphService) -> Self {
        Self {
            graph_service: Arc::new(graph_service),
        }
    }
}

/// Wire the production collaborators: Icinga API, template file, Graphite-web.
pub fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let client = build_http_client(config.http_timeout, config.tls_insecure)?;

    let graph_service = GraphService::new(
        Arc::new(IcingaApiMonitoringStore::new(client.clone(), &config.icinga)),
        Arc::new(GraphTemplateRepository::new(config.template_path.clone())),
        Arc::new(GraphiteWebBackend::new(client, &config.graphite)),
    );

    Ok(AppState::new(graph_service))
}
