//! Hand-written collaborator doubles shared by the graph service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::core::client::metrics_backend_trait::MetricsBackend;
use crate::core::client::monitoring_store_trait::MonitoringStore;
use crate::core::persistence::templates::graph_object_type::GraphObjectType;
use crate::core::persistence::templates::graph_template_api_repository_trait::GraphTemplateApiRepository;
use crate::core::persistence::templates::graph_template_entity::GraphTemplateEntity;
use crate::core::persistence::templates::graph_template_fs_adapter_trait::GraphTemplateFsAdapterTrait;
use crate::domain::graph::dto::chart_image::{ChartImageHandle, RenderOptions};
use crate::domain::graph::dto::metric_query::MetricQuery;
use crate::domain::graph::dto::monitored_object::MonitoredObject;

pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

pub fn template(name: &str, object_type: GraphObjectType, selector: &str) -> GraphTemplateEntity {
    GraphTemplateEntity {
        name: name.into(),
        object_type,
        selector: selector.into(),
        pattern: format!("icinga2.$hostname$.{}.$metric$", name),
    }
}

/// Backend answering per template name and recording every call.
#[derive(Default)]
pub struct MockMetricsBackend {
    pub results: HashMap<String, Vec<ChartImageHandle>>,
    pub fail_execute: bool,
    pub fail_render: bool,
    pub executed: Mutex<Vec<MetricQuery>>,
    pub rendered: Mutex<Vec<(ChartImageHandle, RenderOptions)>>,
}

impl MockMetricsBackend {
    pub fn with_results(results: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(name, targets)| {
                    (
                        name.to_string(),
                        targets.into_iter().map(ChartImageHandle::new).collect(),
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn executed_templates(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.template_name.clone())
            .collect()
    }
}

#[async_trait]
impl MetricsBackend for MockMetricsBackend {
    async fn execute(&self, query: &MetricQuery) -> Result<Vec<ChartImageHandle>> {
        self.executed.lock().unwrap().push(query.clone());
        if self.fail_execute {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.results.get(&query.template_name).cloned().unwrap_or_default())
    }

    async fn render(&self, handle: &ChartImageHandle, options: &RenderOptions) -> Result<Vec<u8>> {
        self.rendered
            .lock()
            .unwrap()
            .push((handle.clone(), options.clone()));
        if self.fail_render {
            return Err(anyhow!("render timed out"));
        }
        Ok(FAKE_PNG.to_vec())
    }
}

#[derive(Default)]
pub struct MockMonitoringStore {
    pub known: Vec<MonitoredObject>,
    pub fail: bool,
    pub lookups: Mutex<Vec<MonitoredObject>>,
}

impl MockMonitoringStore {
    pub fn knowing(known: Vec<MonitoredObject>) -> Self {
        Self {
            known,
            ..Default::default()
        }
    }
}

#[async_trait]
impl MonitoringStore for MockMonitoringStore {
    async fn lookup(&self, object: &MonitoredObject) -> Result<bool> {
        self.lookups.lock().unwrap().push(object.clone());
        if self.fail {
            return Err(anyhow!("api unreachable"));
        }
        Ok(self.known.contains(object))
    }
}

#[derive(Default)]
pub struct MockTemplateAdapter {
    pub templates: Vec<GraphTemplateEntity>,
    pub fail: bool,
}

impl GraphTemplateFsAdapterTrait for MockTemplateAdapter {
    fn read(&self) -> Result<Vec<GraphTemplateEntity>> {
        if self.fail {
            return Err(anyhow!("permission denied"));
        }
        Ok(self.templates.clone())
    }
}

#[derive(Default)]
pub struct MockTemplateRepository {
    pub adapter: MockTemplateAdapter,
}

impl MockTemplateRepository {
    pub fn with(templates: Vec<GraphTemplateEntity>) -> Self {
        Self {
            adapter: MockTemplateAdapter {
                templates,
                fail: false,
            },
        }
    }
}

impl GraphTemplateApiRepository for MockTemplateRepository {
    fn fs_adapter(&self) -> &dyn GraphTemplateFsAdapterTrait {
        &self.adapter
    }
}
