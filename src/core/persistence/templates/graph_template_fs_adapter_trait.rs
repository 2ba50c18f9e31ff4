use anyhow::Result;

use super::graph_template_entity::GraphTemplateEntity;

/// Storage backend for the configured graph templates.
pub trait GraphTemplateFsAdapterTrait: Send + Sync {
    fn read(&self) -> Result<Vec<GraphTemplateEntity>>;
}
