use super::graph_object_type::GraphObjectType;
use super::graph_template_entity::GraphTemplateEntity;
use super::graph_template_fs_adapter_trait::GraphTemplateFsAdapterTrait;

/// API-facing repository abstraction for graph templates.
pub trait GraphTemplateApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn GraphTemplateFsAdapterTrait;

    fn read(&self) -> anyhow::Result<Vec<GraphTemplateEntity>> {
        self.fs_adapter().read()
    }

    /// Templates declared for `object_type`, in file order.
    fn templates_for(&self, object_type: GraphObjectType) -> anyhow::Result<Vec<GraphTemplateEntity>> {
        Ok(self
            .read()?
            .into_iter()
            .filter(|t| t.object_type == object_type)
            .collect())
    }
}
